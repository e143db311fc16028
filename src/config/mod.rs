//! Configuration file support for shapescriber.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapescriber/config.toml`. Settings include canvas dimensions,
//! border rendering, report units, panel styling, and export destinations.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{BorderMethod, Unit};
pub use types::{CanvasConfig, ExportConfig, PanelConfig, RenderConfig, ReportConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
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
/// [canvas]
/// width = 640
/// height = 480
///
/// [render]
/// border_method = "rect"
///
/// [report]
/// unit = "px"
/// precision = 2
///
/// [panel]
/// font_size = 13.0
/// padding = 10.0
///
/// [export]
/// directory = "~/Pictures/Shapescriber"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas dimensions and background color
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Shape rendering options
    #[serde(default)]
    pub render: RenderConfig,

    /// Measurement formatting for the property report
    #[serde(default)]
    pub report: ReportConfig,

    /// Property panel styling
    #[serde(default)]
    pub panel: PanelConfig,

    /// PNG export destination and naming
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause undefined behavior
    /// or rendering issues. Invalid values are clamped to the nearest valid value and a
    /// warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - color components: 0.0 - 1.0
    /// - `report.px_per_cm`: positive (reset to 37.8 otherwise)
    /// - `report.precision`: 0 - 6
    /// - `panel.font_size`: 6.0 - 48.0
    /// - `panel.line_height`: 4.0 - 128.0
    /// - `panel.padding`: 0.0 - 100.0
    fn validate_and_clamp(&mut self) {
        // Canvas dimensions: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        // Color components: 0.0 - 1.0
        clamp_color("canvas.background", &mut self.canvas.background);
        clamp_color("panel.bg_color", &mut self.panel.bg_color);
        clamp_color("panel.text_color", &mut self.panel.text_color);

        // px_per_cm must stay positive; a zero ratio would divide by zero
        if self.report.px_per_cm <= 0.0 || self.report.px_per_cm.is_nan() {
            log::warn!(
                "Invalid px_per_cm {:.3}, falling back to 37.8",
                self.report.px_per_cm
            );
            self.report.px_per_cm = 37.8;
        }

        // Precision: 0 - 6 decimal places
        if self.report.precision > 6 {
            log::warn!(
                "Invalid precision {}, clamping to 0-6 range",
                self.report.precision
            );
            self.report.precision = 6;
        }

        // Panel font size: 6.0 - 48.0
        if !(6.0..=48.0).contains(&self.panel.font_size) {
            log::warn!(
                "Invalid panel font_size {:.1}, clamping to 6.0-48.0 range",
                self.panel.font_size
            );
            self.panel.font_size = self.panel.font_size.clamp(6.0, 48.0);
        }

        // Line height: 4.0 - 128.0
        if !(4.0..=128.0).contains(&self.panel.line_height) {
            log::warn!(
                "Invalid panel line_height {:.1}, clamping to 4.0-128.0 range",
                self.panel.line_height
            );
            self.panel.line_height = self.panel.line_height.clamp(4.0, 128.0);
        }

        // Padding: 0.0 - 100.0
        if !(0.0..=100.0).contains(&self.panel.padding) {
            log::warn!(
                "Invalid panel padding {:.1}, clamping to 0.0-100.0 range",
                self.panel.padding
            );
            self.panel.padding = self.panel.padding.clamp(0.0, 100.0);
        }

        if self.panel.font_family.trim().is_empty() {
            log::warn!("Empty panel font_family, falling back to 'Sans'");
            self.panel.font_family = "Sans".to_string();
        }

        // Cairo only encodes PNG
        if !self.export.format.eq_ignore_ascii_case("png") {
            log::warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapescriber/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapescriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/shapescriber/config.toml`.
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
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/shapescriber/config.toml`. Creates the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
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
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory. Used by `shapescriber --init-config`.
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

    /// The JSON schema describing the configuration file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_color(name: &str, color: &mut [f64; 4]) {
    for (i, component) in color.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(component) {
            log::warn!("Invalid {name}[{i}] = {component:.3}, clamping to 0.0-1.0");
            *component = component.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_stock_canvas() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 480);
        assert_eq!(config.canvas.background, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(config.render.border_method, BorderMethod::Rect);
        assert_eq!(config.report.unit, Unit::Px);
        assert_eq!(config.report.precision, 2);
        assert_eq!(config.panel.font_size, 13.0);
        assert_eq!(config.panel.padding, 10.0);
        assert_eq!(config.panel.line_height, 16.0);
        assert_eq!(config.export.format, "png");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [report]
            unit = "cm"

            [render]
            border_method = "path"
            "#,
        )
        .unwrap();
        assert_eq!(config.report.unit, Unit::Cm);
        assert_eq!(config.report.px_per_cm, 37.8);
        assert_eq!(config.render.border_method, BorderMethod::Path);
        assert_eq!(config.canvas.width, 640);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.canvas.width = 4;
        config.canvas.height = 100_000;
        config.panel.bg_color = [2.0, -1.0, 0.5, 0.8];
        config.report.px_per_cm = 0.0;
        config.report.precision = 12;
        config.panel.font_size = 300.0;
        config.export.format = "webp".to_string();
        config.panel.font_family = "  ".to_string();

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.panel.bg_color, [1.0, 0.0, 0.5, 0.8]);
        assert_eq!(config.report.px_per_cm, 37.8);
        assert_eq!(config.report.precision, 6);
        assert_eq!(config.panel.font_size, 48.0);
        assert_eq!(config.export.format, "png");
        assert_eq!(config.panel.font_family, "Sans");
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[canvas]"));
        assert!(toml_str.contains("[export]"));
        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.canvas.width, config.canvas.width);
    }

    #[test]
    fn schema_includes_every_section() {
        let schema = Config::json_schema();
        let json = serde_json::to_string(&schema).unwrap();
        for section in ["canvas", "render", "report", "panel", "export"] {
            assert!(json.contains(section), "schema missing section {section}");
        }
    }
}
