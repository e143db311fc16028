//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display unit for report measurements.
///
/// Controls only how quantities are formatted; vertex geometry always works
/// in pixels.
///
/// # Examples
/// ```toml
/// [report]
/// unit = "cm"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    /// Raw pixel values (`px`, `sq px`)
    Px,
    /// Centimeters derived from the configured `px_per_cm` ratio
    Cm,
}

/// How the border of squares and rectangles is stroked.
///
/// # Examples
/// ```toml
/// [render]
/// border_method = "path"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BorderMethod {
    /// Fill and stroke as two independent rectangle operations
    Rect,
    /// Trace one corner path, fill it, then stroke the preserved path
    Path,
}
