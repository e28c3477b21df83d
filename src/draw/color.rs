//! RGBA color type, predefined colors and the picker palette.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let parsed: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red, parsed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The text started with `#` but was not six hex digits
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),
    /// The text was neither a hex color nor a known color name
    #[error("unknown color '{0}'")]
    UnknownName(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb`. Alpha is always opaque.
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(text.to_string());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        // from_str_radix would also take a sign, so check the digits first
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b)
        )
    }

    /// Perceived brightness, used to pick a contrasting outline.
    pub fn luminance(&self) -> f64 {
        self.r * 0.299 + self.g * 0.587 + self.b * 0.114
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rrggbb` or one of the palette names (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        crate::util::name_to_color(trimmed)
            .ok_or_else(|| ColorParseError::UnknownName(trimmed.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);
pub const DARK_GRAY: Color = Color::new(0.25, 0.25, 0.25, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 0.5, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);
pub const PURPLE: Color = Color::new(0.5, 0.0, 0.5, 1.0);
pub const BROWN: Color = Color::new(0.6, 0.3, 0.1, 1.0);
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const NAVY: Color = Color::new(0.0, 0.0, 0.5, 1.0);
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const TEAL: Color = Color::new(0.0, 0.5, 0.5, 1.0);

/// Swatches offered by the color picker dialog, in grid order (row-major).
pub const PALETTE: [Color; 16] = [
    BLACK, DARK_GRAY, GRAY, WHITE, RED, ORANGE, YELLOW, BROWN, LIME, GREEN, TEAL, CYAN, BLUE, NAVY,
    PURPLE, PINK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_both_cases() {
        assert_eq!(Color::from_hex("#000000").unwrap(), BLACK);
        assert_eq!(Color::from_hex("#FFffFF").unwrap(), WHITE);
        let orange = Color::from_hex("#ff8000").unwrap();
        assert_eq!(orange.to_hex(), "#ff8000");
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        let malformed = [
            "000000", "#12345", "#1234567", "#gg0000", "#ééé", "#+1+2+3", "#-10000",
        ];
        for bad in malformed {
            assert!(
                matches!(Color::from_hex(bad), Err(ColorParseError::InvalidHex(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn from_str_falls_back_to_names() {
        assert_eq!(" Red ".parse::<Color>().unwrap(), RED);
        assert_eq!("#0000ff".parse::<Color>().unwrap(), BLUE);
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError::UnknownName("chartreuse".to_string()))
        );
    }

    #[test]
    fn palette_has_no_duplicates() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
