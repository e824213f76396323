//! Configuration file support for waysketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/waysketch/config.toml`. Settings include the window size and
//! background, drawing defaults, console behavior, performance tuning, and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::StatusPosition;
pub use types::{ConsoleConfig, DrawingConfig, PerformanceConfig, UiConfig, WindowConfig};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::ColorSpec;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [window]
/// width = 800
/// height = 600
/// background = "white"
///
/// [drawing]
/// pen_color = "black"
/// line_width = 2.0
/// default_mode = "polygon"
///
/// [console]
/// clear_on_focus = true
///
/// [ui]
/// show_status_bar = true
/// status_position = "bottom-left"
///
/// [performance]
/// buffer_count = 3
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas window size and background
    #[serde(default)]
    pub window: WindowConfig,

    /// Drawing defaults (pen, brush, marker, line width, startup mode)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Console command loop behavior
    #[serde(default)]
    pub console: ConsoleConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause undefined behavior
    /// or rendering issues. Invalid values are clamped to the nearest valid value and a
    /// warning is logged.
    ///
    /// Validated ranges:
    /// - `window.width` / `window.height`: 100 - 7680
    /// - `marker_radius`: 1 - 16
    /// - `line_width`: 1.0 - 20.0
    /// - `ui.font_size`: 8.0 - 72.0
    /// - `buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        // Window dimensions: 100 - 7680
        if !(100..=7680).contains(&self.window.width) {
            warn!(
                "Invalid window width {}, clamping to 100-7680 range",
                self.window.width
            );
            self.window.width = self.window.width.clamp(100, 7680);
        }
        if !(100..=7680).contains(&self.window.height) {
            warn!(
                "Invalid window height {}, clamping to 100-7680 range",
                self.window.height
            );
            self.window.height = self.window.height.clamp(100, 7680);
        }

        // Marker radius: 1 - 16
        if !(1..=16).contains(&self.drawing.marker_radius) {
            warn!(
                "Invalid marker_radius {}, clamping to 1-16 range",
                self.drawing.marker_radius
            );
            self.drawing.marker_radius = self.drawing.marker_radius.clamp(1, 16);
        }

        // Line width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.line_width) {
            warn!(
                "Invalid line_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.line_width
            );
            self.drawing.line_width = self.drawing.line_width.clamp(1.0, 20.0);
        }

        // Status bar font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.ui.font_size) {
            warn!(
                "Invalid status bar font_size {:.1}, clamping to 8.0-72.0 range",
                self.ui.font_size
            );
            self.ui.font_size = self.ui.font_size.clamp(8.0, 72.0);
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        // Validate startup drawing mode
        if !matches!(
            self.drawing.default_mode.to_lowercase().as_str(),
            "polygon" | "circle"
        ) {
            warn!(
                "Invalid default_mode '{}', falling back to 'polygon'",
                self.drawing.default_mode
            );
            self.drawing.default_mode = "polygon".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/waysketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("waysketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/waysketch/config.toml`.
    /// If the file doesn't exist, returns a Config with default values. All loaded values
    /// are validated and clamped to acceptable ranges.
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

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to `~/.config/waysketch/config.toml`.
    /// Creates the parent directory if it doesn't exist. This method is kept for future use
    /// (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory. Used by `waysketch --init-config`.
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
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, WHITE};

    fn parse(toml_str: &str) -> Config {
        let mut config: Config = toml::from_str(toml_str).expect("config parses");
        config.validate_and_clamp();
        config
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.background.to_color(), WHITE);
        assert_eq!(config.drawing.effective_pen(), Some(BLACK));
        assert_eq!(config.drawing.effective_brush(), None);
        assert_eq!(config.drawing.default_mode, "polygon");
        assert!(config.console.enabled);
        assert!(config.ui.show_status_bar);
        assert_eq!(config.performance.buffer_count, 3);
    }

    #[test]
    fn partial_file_keeps_unmentioned_defaults() {
        let config = parse(
            r#"
            [drawing]
            default_mode = "circle"
            brush_color = "blue"
            "#,
        );
        assert_eq!(config.drawing.default_mode, "circle");
        assert_eq!(config.drawing.effective_brush(), Some(BLUE));
        // Untouched sections stay at their defaults.
        assert_eq!(config.window.width, 800);
        assert_eq!(config.drawing.line_width, 2.0);
    }

    #[test]
    fn none_tokens_clear_pen_and_brush() {
        let config = parse(
            r#"
            [drawing]
            pen_color = "none"
            brush_color = "none"
            "#,
        );
        assert_eq!(config.drawing.effective_pen(), None);
        assert_eq!(config.drawing.effective_brush(), None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse(
            r#"
            [window]
            width = 10
            height = 99999

            [drawing]
            marker_radius = 99
            line_width = 0.1

            [ui]
            font_size = 500.0

            [performance]
            buffer_count = 9
            "#,
        );
        assert_eq!(config.window.width, 100);
        assert_eq!(config.window.height, 7680);
        assert_eq!(config.drawing.marker_radius, 16);
        assert_eq!(config.drawing.line_width, 1.0);
        assert_eq!(config.ui.font_size, 72.0);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn unknown_default_mode_falls_back_to_polygon() {
        let config = parse(
            r#"
            [drawing]
            default_mode = "dodecahedron"
            "#,
        );
        assert_eq!(config.drawing.default_mode, "polygon");
    }

    #[test]
    fn rgb_background_parses_as_array() {
        let config = parse(
            r#"
            [window]
            background = [255, 255, 255]
            "#,
        );
        assert_eq!(config.window.background.to_color(), WHITE);
    }

    #[test]
    fn status_position_uses_kebab_case() {
        let config = parse(
            r#"
            [ui]
            status_position = "top-right"
            "#,
        );
        assert_eq!(config.ui.status_position, StatusPosition::TopRight);
    }

    #[test]
    fn example_config_parses_with_defaults_intact() {
        // The file shipped by --init-config documents the defaults; parsing
        // it must produce the same values as an absent file.
        let from_example = parse(include_str!("../../config.example.toml"));
        let defaults = Config::default();
        assert_eq!(from_example.window.width, defaults.window.width);
        assert_eq!(from_example.window.height, defaults.window.height);
        assert_eq!(
            from_example.drawing.default_mode,
            defaults.drawing.default_mode
        );
        assert_eq!(from_example.drawing.line_width, defaults.drawing.line_width);
        assert_eq!(
            from_example.performance.buffer_count,
            defaults.performance.buffer_count
        );
    }
}
