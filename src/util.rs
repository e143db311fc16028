//! Utility functions for color naming and parsing.
//!
//! This module provides:
//! - Palette name ↔ color mapping (constants live in draw::color)
//! - `#RRGGBB` hex parsing for colors outside the palette
//! - The display string used by the property report

use crate::draw::{Color, color::PALETTE};

/// Component tolerance when matching a color against the palette.
const NAME_MATCH_TOLERANCE: f64 = 1.0 / 255.0 / 2.0;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps a palette name to its Color value.
///
/// Matching is forgiving about capitalization and separators, so
/// "Steel Blue", "steelblue", and "STEEL-BLUE" all resolve to the same
/// swatch.
///
/// # Arguments
/// * `name` - Palette color name
///
/// # Returns
/// - `Some(Color)` if the name matches a palette entry
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let wanted = normalize_name(name);
    PALETTE
        .iter()
        .find(|(_, candidate)| normalize_name(candidate) == wanted)
        .map(|(color, _)| *color)
}

/// Maps a Color value back to its palette name.
///
/// # Returns
/// The palette name, or `None` for colors outside the palette.
pub fn color_to_name(color: &Color) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(candidate, _)| {
            approx_eq(candidate.r, color.r)
                && approx_eq(candidate.g, color.g)
                && approx_eq(candidate.b, color.b)
                && approx_eq(candidate.a, color.a)
        })
        .map(|(_, name)| *name)
}

/// Parses a `#RRGGBB` hex string (the `#` is optional).
///
/// # Returns
/// - `Some(Color)` for a well-formed six-digit hex triplet
/// - `None` otherwise
pub fn parse_hex_color(input: &str) -> Option<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

/// Parses either a palette name or a `#RRGGBB` hex string.
pub fn parse_color(input: &str) -> Option<Color> {
    name_to_color(input).or_else(|| parse_hex_color(input))
}

/// Formats a color as a lowercase `#rrggbb` string.
pub fn color_hex(color: &Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8
    )
}

/// The display string for a fill color: its palette name, or the hex
/// fallback for anything custom.
pub fn describe_color(color: Color) -> String {
    color_to_name(&color)
        .map(str::to_string)
        .unwrap_or_else(|| color_hex(&color))
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < NAME_MATCH_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, STEEL_BLUE, TOMATO, WHITE};

    #[test]
    fn palette_names_resolve_regardless_of_separators() {
        assert_eq!(name_to_color("Steel Blue").unwrap(), STEEL_BLUE);
        assert_eq!(name_to_color("steelblue").unwrap(), STEEL_BLUE);
        assert_eq!(name_to_color("STEEL-BLUE").unwrap(), STEEL_BLUE);
        assert_eq!(name_to_color("tomato").unwrap(), TOMATO);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn color_to_name_covers_the_whole_palette() {
        for (color, name) in PALETTE {
            assert_eq!(color_to_name(&color), Some(name));
        }
        let custom = Color::from_rgb8(18, 52, 86);
        assert_eq!(color_to_name(&custom), None);
    }

    #[test]
    fn color_to_name_requires_matching_alpha() {
        // Palette swatches are opaque; a translucent white is not White
        // and falls back to the alpha-less hex form.
        let translucent = Color::new(1.0, 1.0, 1.0, 0.5);
        assert_eq!(color_to_name(&translucent), None);
        assert_eq!(describe_color(translucent), "#ffffff");
    }

    #[test]
    fn hex_parsing_round_trips_through_formatting() {
        let parsed = parse_hex_color("#ff6347").unwrap();
        assert_eq!(parsed, TOMATO);
        assert_eq!(color_hex(&parsed), "#ff6347");

        assert_eq!(parse_hex_color("123456").unwrap(), Color::from_rgb8(18, 52, 86));
        assert!(parse_hex_color("#12345").is_none());
        assert!(parse_hex_color("#12345g").is_none());
        assert!(parse_hex_color("").is_none());
    }

    #[test]
    fn parse_color_accepts_names_and_hex() {
        assert_eq!(parse_color("white").unwrap(), WHITE);
        assert_eq!(parse_color("#000000").unwrap(), BLACK);
        assert!(parse_color("not-a-color").is_none());
    }

    #[test]
    fn describe_color_prefers_palette_names() {
        assert_eq!(describe_color(TOMATO), "Tomato");
        assert_eq!(describe_color(Color::from_rgb8(18, 52, 86)), "#123456");
    }
}
