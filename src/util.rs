//! Utility functions for color names and hit-testing geometry.
//!
//! This module provides:
//! - Name-to-color mapping used by the CLI and the configuration file
//! - Color-to-name mapping used in log output
//! - A small axis-aligned rectangle used for toolbar and dialog layout

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Every palette color together with the name accepted for it.
const NAMED_COLORS: [(&str, Color); 16] = [
    ("black", BLACK),
    ("darkgray", DARK_GRAY),
    ("gray", GRAY),
    ("white", WHITE),
    ("red", RED),
    ("orange", ORANGE),
    ("yellow", YELLOW),
    ("brown", BROWN),
    ("lime", LIME),
    ("green", GREEN),
    ("teal", TEAL),
    ("cyan", CYAN),
    ("blue", BLUE),
    ("navy", NAVY),
    ("purple", PURPLE),
    ("pink", PINK),
];

/// Maps color name strings to Color values.
///
/// Used by the configuration system and `--color` to parse color names.
/// Matching is case-insensitive and ignores `-`, `_` and spaces, so
/// `"Dark Gray"` and `"dark_gray"` both resolve.
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let normalized: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let normalized = match normalized.as_str() {
        "grey" => "gray",
        "darkgrey" => "darkgray",
        "magenta" => "pink",
        other => other,
    };

    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, color)| *color)
}

/// Maps a Color value to its palette name.
///
/// Returns "custom" for colors that are not part of the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|(_, candidate)| candidate == color)
        .map(|(name, _)| *name)
        .unwrap_or("custom")
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle used for layout and pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Returns true if the point lies inside (min edges inclusive, max edges exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < (self.x + self.width) as f64
            && y < (self.y + self.height) as f64
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mapping_is_forgiving() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("RED").unwrap(), RED);
        assert_eq!(name_to_color("Dark Gray").unwrap(), DARK_GRAY);
        assert_eq!(name_to_color("grey").unwrap(), GRAY);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn every_palette_color_has_a_name() {
        for color in PALETTE {
            let name = color_to_name(&color);
            assert_ne!(name, "custom");
            assert_eq!(name_to_color(name), Some(color));
        }
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42, 1.0)), "custom");
    }

    #[test]
    fn rect_contains_uses_half_open_edges() {
        let rect = Rect::new(10, 10, 20, 5).unwrap();
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 14.9));
        assert!(!rect.contains(30.0, 12.0));
        assert!(!rect.contains(15.0, 15.0));
        assert_eq!((rect.right(), rect.bottom()), (30, 15));
    }

    #[test]
    fn rect_rejects_empty_areas() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::new(5, 5, -1, 10).is_none());
        assert!(Rect::new(0, 0, 1, 1).is_some());
    }
}
