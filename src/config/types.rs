//! Configuration type definitions.

use super::enums::{BorderMethod, Unit};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas dimensions and background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_canvas_background")]
    pub background: [f64; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_canvas_background(),
        }
    }
}

/// Shape rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Border technique for squares and rectangles (rect or path)
    #[serde(default = "default_border_method")]
    pub border_method: BorderMethod,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            border_method: default_border_method(),
        }
    }
}

/// Measurement formatting for the property report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportConfig {
    /// Display unit for computed quantities (px or cm)
    #[serde(default = "default_unit")]
    pub unit: Unit,

    /// Pixels per centimeter when converting to cm (37.8 ≈ 96 dpi / 2.54)
    #[serde(default = "default_px_per_cm")]
    pub px_per_cm: f64,

    /// Decimal places for formatted quantities (valid range: 0 - 6)
    #[serde(default = "default_precision")]
    pub precision: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            px_per_cm: default_px_per_cm(),
            precision: default_precision(),
        }
    }
}

/// Property panel styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PanelConfig {
    /// Font family name for panel text (e.g., "Sans", "Monospace")
    /// Falls back to "Sans" if the specified font is not available
    #[serde(default = "default_panel_font_family")]
    pub font_family: String,

    /// Font size for panel text in points (valid range: 6.0 - 48.0)
    #[serde(default = "default_panel_font_size")]
    pub font_size: f64,

    /// Padding around the text block in pixels
    #[serde(default = "default_panel_padding")]
    pub padding: f64,

    /// Vertical distance between line tops in pixels
    #[serde(default = "default_panel_line_height")]
    pub line_height: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_text_color")]
    pub text_color: [f64; 4],
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            font_family: default_panel_font_family(),
            font_size: default_panel_font_size(),
            padding: default_panel_padding(),
            line_height: default_panel_line_height(),
            bg_color: default_panel_bg_color(),
            text_color: default_panel_text_color(),
        }
    }
}

/// PNG export destination and naming.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory to save images to (supports ~ expansion).
    /// Defaults to ~/Pictures/Shapescriber when unset.
    #[serde(default)]
    pub directory: Option<String>,

    /// Timestamp template for generated filenames (chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension (only "png" is supported)
    #[serde(default = "default_export_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
            format: default_export_format(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    640
}

fn default_canvas_height() -> i32 {
    480
}

fn default_canvas_background() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_border_method() -> BorderMethod {
    BorderMethod::Rect
}

fn default_unit() -> Unit {
    Unit::Px
}

fn default_px_per_cm() -> f64 {
    37.8
}

fn default_precision() -> u8 {
    2
}

// Panel style defaults
fn default_panel_font_family() -> String {
    "Sans".to_string()
}

fn default_panel_font_size() -> f64 {
    13.0
}

fn default_panel_padding() -> f64 {
    10.0
}

fn default_panel_line_height() -> f64 {
    16.0
}

fn default_panel_bg_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 0.8]
}

fn default_panel_text_color() -> [f64; 4] {
    [0.2, 0.2, 0.2, 1.0]
}

// Export defaults
fn default_filename_template() -> String {
    "%Y%m%d_%H%M%S".to_string()
}

fn default_export_format() -> String {
    "png".to_string()
}
