//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include drawing defaults,
//! canvas size, toolbar appearance, and performance tuning.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, PerformanceConfig, UiConfig};

use crate::draw::{BLACK, Color, WHITE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "navy"
/// default_thickness = 3
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [ui]
/// toolbar_height = 36
/// font_size = 12.0
///
/// [performance]
/// buffer_count = 2
/// enable_vsync = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial drawing color and thickness
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawing area size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Toolbar and dialog appearance
    #[serde(default)]
    pub ui: UiConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default for colors) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1 - 100
    /// - `canvas.width`, `canvas.height`: 100 - 4000
    /// - `toolbar_height`: 24 - 96
    /// - `font_size`: 8.0 - 32.0
    /// - `buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        // Thickness: 1 - 100
        if !(1..=100).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {}, clamping to 1-100 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1, 100);
        }

        if let Err(err) = self.drawing.default_color.to_color() {
            warn!("Invalid default_color: {err}, falling back to black");
            self.drawing.default_color = types::default_color();
        }

        // Canvas size: 100 - 4000
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(100..=4000).contains(&*value) {
                warn!("Invalid canvas {name} {value}, clamping to 100-4000 range");
                *value = (*value).clamp(100, 4000);
            }
        }

        if let Err(err) = self.canvas.background.to_color() {
            warn!("Invalid canvas background: {err}, falling back to white");
            self.canvas.background = types::default_background();
        }

        // Toolbar height: 24 - 96
        if !(24..=96).contains(&self.ui.toolbar_height) {
            warn!(
                "Invalid toolbar_height {}, clamping to 24-96 range",
                self.ui.toolbar_height
            );
            self.ui.toolbar_height = self.ui.toolbar_height.clamp(24, 96);
        }

        // Font size: 8.0 - 32.0
        if !(8.0..=32.0).contains(&self.ui.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 8.0-32.0 range",
                self.ui.font_size
            );
            self.ui.font_size = if self.ui.font_size.is_nan() {
                8.0
            } else {
                self.ui.font_size.clamp(8.0, 32.0)
            };
        }

        // UI colors (0.0-1.0 per channel)
        for (name, rgba) in [
            ("background_color", &mut self.ui.background_color),
            ("button_color", &mut self.ui.button_color),
            ("text_color", &mut self.ui.text_color),
            ("accent_color", &mut self.ui.accent_color),
        ] {
            for (i, channel) in rgba.iter_mut().enumerate() {
                if !(0.0..=1.0).contains(&*channel) {
                    warn!("Invalid ui.{name}[{i}] = {channel:.3}, clamping to 0.0-1.0");
                    *channel = if channel.is_nan() {
                        0.0
                    } else {
                        (*channel).clamp(0.0, 1.0)
                    };
                }
            }
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Initial drawing color.
    pub fn drawing_color(&self) -> Color {
        self.drawing.default_color.to_color().unwrap_or(BLACK)
    }

    /// Canvas background color.
    pub fn background_color(&self) -> Color {
        self.canvas.background.to_color().unwrap_or(WHITE)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`
    /// (or under `$XDG_CONFIG_HOME` when set).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses TOML text and validates the result.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();
        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::NAVY;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_thickness, 3);
        assert_eq!((config.canvas.width, config.canvas.height), (600, 400));
        assert_eq!(config.drawing_color(), BLACK);
        assert_eq!(config.background_color(), WHITE);
        assert_eq!(config.performance.buffer_count, 2);
        assert!(config.performance.enable_vsync);
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config = Config::from_toml(EXAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(
            config.drawing.default_thickness,
            defaults.drawing.default_thickness
        );
        assert_eq!(config.drawing_color(), defaults.drawing_color());
        assert_eq!(config.canvas.width, defaults.canvas.width);
        assert_eq!(config.ui.toolbar_height, defaults.ui.toolbar_height);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_thickness = 0

            [canvas]
            width = 20
            height = 9000

            [ui]
            toolbar_height = 200
            font_size = 2.0
            accent_color = [1.5, -0.5, 0.5, 1.0]

            [performance]
            buffer_count = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_thickness, 1);
        assert_eq!((config.canvas.width, config.canvas.height), (100, 4000));
        assert_eq!(config.ui.toolbar_height, 96);
        assert_eq!(config.ui.font_size, 8.0);
        assert_eq!(config.ui.accent_color, [1.0, 0.0, 0.5, 1.0]);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn colors_accept_names_hex_and_rgb() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = "Navy"

            [canvas]
            background = [255, 255, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing_color(), NAVY);
        assert_eq!(config.background_color(), Color::from_rgb8(255, 255, 0));

        let config = Config::from_toml("[drawing]\ndefault_color = \"#00ff00\"\n").unwrap();
        assert_eq!(config.drawing_color().to_hex(), "#00ff00");
    }

    #[test]
    fn unknown_colors_fall_back_to_defaults() {
        let config = Config::from_toml(
            "[drawing]\ndefault_color = \"mauve\"\n[canvas]\nbackground = \"#12\"\n",
        )
        .unwrap();
        assert_eq!(config.drawing.default_color, ColorSpec::Name("black".into()));
        assert_eq!(config.background_color(), WHITE);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\ndefault_thickness = 3").is_err());
        assert!(Config::from_toml("[drawing]\ndefault_thickness = \"thick\"").is_err());
    }

    #[test]
    fn load_from_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_from(&missing).is_err());

        let present = dir.path().join("config.toml");
        fs::write(&present, "[drawing]\ndefault_thickness = 9\n").unwrap();
        let config = Config::load_from(&present).unwrap();
        assert_eq!(config.drawing.default_thickness, 9);
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["drawing", "canvas", "ui", "performance", "default_thickness"] {
            assert!(schema.contains(section), "schema is missing {section}");
        }
    }
}
