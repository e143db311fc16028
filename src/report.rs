//! Builds the geometric property report shown in the canvas panel.
//!
//! A report is an ordered list of [`PropertyLine`]s: a common prefix
//! (shape name, fill color, input scale), a `Properties:` header, then
//! per-shape descriptive facts and measured quantities. Measurements are
//! formatted according to [`ReportConfig`]; vertex geometry is never
//! affected by the display unit.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::config::{ReportConfig, Unit};
use crate::draw::render::{RECTANGLE_HEIGHT_FACTOR, RECTANGLE_WIDTH_FACTOR, STAR_SPIKES};
use crate::draw::shape::{ShapeError, ShapeKind, ShapeParams};
use crate::util;

/// One line of the property report.
///
/// Measured quantities are label/value pairs; descriptive facts and the
/// section header are free text. Pairs serialize as objects, free text as
/// plain JSON strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyLine {
    Pair { label: String, value: String },
    Text(String),
}

impl PropertyLine {
    fn pair(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Pair {
            label: label.into(),
            value: value.into(),
        }
    }

    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl fmt::Display for PropertyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair { label, value } => write!(f, "{label}: {value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Ordered property lines for one rendered shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyReport {
    /// Display name of the reported shape.
    pub shape: String,
    /// Panel lines, top to bottom.
    pub lines: Vec<PropertyLine>,
}

impl PropertyReport {
    /// Looks up the value of the first pair line with the given label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            PropertyLine::Pair { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for PropertyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Computes the property report for a shape.
///
/// # Errors
/// [`ShapeError::InvalidGeometryParameter`] when the parameters fail
/// validation, so a report is never produced for geometry that would be
/// rejected at draw time.
pub fn build_report(
    params: &ShapeParams,
    config: &ReportConfig,
) -> Result<PropertyReport, ShapeError> {
    params.validate()?;

    let mut lines = vec![
        PropertyLine::pair("Shape", params.kind.display_name()),
        PropertyLine::pair("Color", util::describe_color(params.fill_color)),
        PropertyLine::pair("Input Scale", format_scale(params.size)),
        PropertyLine::text("Properties:"),
    ];

    let size = params.size;
    match params.kind {
        ShapeKind::Circle => circle_lines(&mut lines, size, config),
        ShapeKind::Square => square_lines(&mut lines, size, config),
        ShapeKind::Rectangle => rectangle_lines(&mut lines, size, config),
        ShapeKind::Triangle => triangle_lines(&mut lines, size, config),
        ShapeKind::Star => star_lines(&mut lines),
        ShapeKind::Pentagon => regular_polygon_lines(&mut lines, 5, size, config),
        ShapeKind::Hexagon => regular_polygon_lines(&mut lines, 6, size, config),
        ShapeKind::Polygon(sides) => regular_polygon_lines(&mut lines, sides, size, config),
        ShapeKind::Line => line_lines(&mut lines, size, params.stroke_width, config),
    }

    Ok(PropertyReport {
        shape: params.kind.display_name().to_string(),
        lines,
    })
}

fn circle_lines(lines: &mut Vec<PropertyLine>, size: f64, config: &ReportConfig) {
    let radius = size / 2.0;
    lines.push(PropertyLine::text("Circular form"));
    lines.push(PropertyLine::text("No corners or edges"));
    lines.push(PropertyLine::pair("Radius", format_length(radius, config)));
    lines.push(PropertyLine::pair("Diameter", format_length(size, config)));
    lines.push(PropertyLine::pair(
        "Circumference",
        format_length(2.0 * PI * radius, config),
    ));
    lines.push(PropertyLine::pair(
        "Area",
        format_area(PI * radius * radius, config),
    ));
}

fn square_lines(lines: &mut Vec<PropertyLine>, size: f64, config: &ReportConfig) {
    lines.push(PropertyLine::text("4 equal sides"));
    lines.push(PropertyLine::text("4 right (90°) angles"));
    lines.push(PropertyLine::pair("Side length", format_length(size, config)));
    lines.push(PropertyLine::pair(
        "Perimeter",
        format_length(4.0 * size, config),
    ));
    lines.push(PropertyLine::pair("Area", format_area(size * size, config)));
}

fn rectangle_lines(lines: &mut Vec<PropertyLine>, size: f64, config: &ReportConfig) {
    let width = size * RECTANGLE_WIDTH_FACTOR;
    let height = size * RECTANGLE_HEIGHT_FACTOR;
    lines.push(PropertyLine::text("4 sides"));
    lines.push(PropertyLine::text("Opposite sides are equal"));
    lines.push(PropertyLine::text("4 right (90°) angles"));
    lines.push(PropertyLine::pair("Width", format_length(width, config)));
    lines.push(PropertyLine::pair("Height", format_length(height, config)));
    lines.push(PropertyLine::pair(
        "Perimeter",
        format_length(2.0 * (width + height), config),
    ));
    lines.push(PropertyLine::pair(
        "Area",
        format_area(width * height, config),
    ));
}

fn triangle_lines(lines: &mut Vec<PropertyLine>, size: f64, config: &ReportConfig) {
    // Equilateral triangle inscribed in a circle of radius size/2. The
    // labels keep the "Approx." prefix even though the math is exact.
    let radius = size / 2.0;
    let side = 2.0 * radius * (PI / 3.0).sin();
    let height = side * 3.0_f64.sqrt() / 2.0;
    lines.push(PropertyLine::text("3 sides"));
    lines.push(PropertyLine::text("3 angles"));
    lines.push(PropertyLine::text("Sum of angles = 180°"));
    lines.push(PropertyLine::pair("Approx. Side", format_length(side, config)));
    lines.push(PropertyLine::pair(
        "Approx. Perimeter",
        format_length(3.0 * side, config),
    ));
    lines.push(PropertyLine::pair(
        "Approx. Area",
        format_area(0.5 * side * height, config),
    ));
}

fn star_lines(lines: &mut Vec<PropertyLine>) {
    lines.push(PropertyLine::text(format!("{STAR_SPIKES} points")));
    lines.push(PropertyLine::text("Complex polygon"));
}

fn regular_polygon_lines(
    lines: &mut Vec<PropertyLine>,
    sides: u32,
    size: f64,
    config: &ReportConfig,
) {
    let radius = size / 2.0;
    let n = f64::from(sides);
    let side = 2.0 * radius * (PI / n).sin();
    let apothem = radius * (PI / n).cos();
    lines.push(PropertyLine::text(format!("{sides} equal sides")));
    lines.push(PropertyLine::text(format!("{sides} equal angles")));
    lines.push(PropertyLine::pair("Side length", format_length(side, config)));
    lines.push(PropertyLine::pair("Apothem", format_length(apothem, config)));
    lines.push(PropertyLine::pair(
        "Perimeter",
        format_length(n * side, config),
    ));
    lines.push(PropertyLine::pair(
        "Area",
        format_area(0.5 * n * side * apothem, config),
    ));
}

fn line_lines(lines: &mut Vec<PropertyLine>, size: f64, stroke_width: f64, config: &ReportConfig) {
    lines.push(PropertyLine::text("One dimension: length"));
    lines.push(PropertyLine::pair(
        "Length",
        format_length(2.0 * size, config),
    ));
    lines.push(PropertyLine::pair(
        "Display Width",
        format_length(stroke_width, config),
    ));
}

/// The raw input size, always in pixels regardless of the report unit.
fn format_scale(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{size:.0} px")
    } else {
        format!("{size} px")
    }
}

/// Formats a one-dimensional quantity in the configured unit.
fn format_length(px: f64, config: &ReportConfig) -> String {
    let precision = config.precision as usize;
    match config.unit {
        Unit::Px => format!("{px:.precision$} px"),
        Unit::Cm => format!("{:.precision$} cm", px / config.px_per_cm),
    }
}

/// Formats a two-dimensional quantity in the configured unit.
fn format_area(sq_px: f64, config: &ReportConfig) -> String {
    let precision = config.precision as usize;
    match config.unit {
        Unit::Px => format!("{sq_px:.precision$} sq px"),
        Unit::Cm => format!(
            "{:.precision$} sq cm",
            sq_px / (config.px_per_cm * config.px_per_cm)
        ),
    }
}
