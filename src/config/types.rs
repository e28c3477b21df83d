//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the color and thickness used when the window first opens.
/// Both can be changed at runtime from the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color - a palette name (red, blue, navy, ...), a `#rrggbb`
    /// string, or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial stroke thickness in pixels (valid range: 1 - 100)
    #[serde(default = "default_thickness")]
    pub default_thickness: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
        }
    }
}

/// Drawing area settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 100 - 4000)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 100 - 4000)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color behind all drawn items
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Toolbar and dialog appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Toolbar strip height in pixels (valid range: 24 - 96)
    #[serde(default = "default_toolbar_height")]
    pub toolbar_height: u32,

    /// Label font size in pixels (valid range: 8.0 - 32.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Toolbar background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],

    /// Button face color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_button_color")]
    pub button_color: [f64; 4],

    /// Label text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_text_color")]
    pub text_color: [f64; 4],

    /// Highlight for the active tool and the focused field [R, G, B, A]
    #[serde(default = "default_accent_color")]
    pub accent_color: [f64; 4],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toolbar_height: default_toolbar_height(),
            font_size: default_font_size(),
            background_color: default_background_color(),
            button_color: default_button_color(),
            text_color: default_text_color(),
            accent_color: default_accent_color(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shared-memory buffers (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory)
    /// - 3 = triple buffering
    /// - 4 = quad buffering (highest memory)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for the compositor's frame callback before drawing the next frame
    /// Set to false for lower latency at the cost of redundant redraws
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

pub(super) fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> u32 {
    3
}

fn default_canvas_width() -> u32 {
    600
}

fn default_canvas_height() -> u32 {
    400
}

pub(super) fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_toolbar_height() -> u32 {
    36
}

fn default_font_size() -> f64 {
    12.0
}

fn default_background_color() -> [f64; 4] {
    [0.92, 0.92, 0.92, 1.0]
}

fn default_button_color() -> [f64; 4] {
    [0.98, 0.98, 0.98, 1.0]
}

fn default_text_color() -> [f64; 4] {
    [0.1, 0.1, 0.1, 1.0]
}

fn default_accent_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 1.0]
}

fn default_buffer_count() -> u32 {
    2
}

fn default_enable_vsync() -> bool {
    true
}
