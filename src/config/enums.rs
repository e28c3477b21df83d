//! Configuration enum types.

use crate::draw::{Color, ColorParseError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette color name (black, darkgray, gray, white, red, orange, yellow,
    /// brown, lime, green, teal, cyan, blue, navy, purple, pink) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Names and hex strings go through [`Color`]'s `FromStr`. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorSpec::Name(name) => name.parse(),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn named_hex_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), Ok(RED));
        assert_eq!(ColorSpec::Name("#ff8000".into()).to_color().unwrap().to_hex(), "#ff8000");
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color().unwrap(),
            Color::from_rgb8(255, 0, 0)
        );
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(ColorSpec::Name("mauve".into()).to_color().is_err());
    }
}
