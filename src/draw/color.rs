//! RGBA color type and the fill palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use shapescriber::draw::Color;
/// let tomato = Color::from_rgb8(255, 99, 71);
/// let semi_transparent_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 to 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Fill Palette (11 swatches)
// ============================================================================

/// Tomato (#FF6347) - the default fill color
pub const TOMATO: Color = Color::from_rgb8(255, 99, 71);

/// Steel Blue (#4682B4)
pub const STEEL_BLUE: Color = Color::from_rgb8(70, 130, 180);

/// Lime Green (#32CD32)
pub const LIME_GREEN: Color = Color::from_rgb8(50, 205, 50);

/// Gold (#FFD700)
pub const GOLD: Color = Color::from_rgb8(255, 215, 0);

/// Blue Violet (#8A2BE2)
pub const BLUE_VIOLET: Color = Color::from_rgb8(138, 43, 226);

/// Hot Pink (#FF69B4)
pub const HOT_PINK: Color = Color::from_rgb8(255, 105, 180);

/// Dark Turquoise (#00CED1)
pub const DARK_TURQUOISE: Color = Color::from_rgb8(0, 206, 209);

/// Chocolate (#D2691E)
pub const CHOCOLATE: Color = Color::from_rgb8(210, 105, 30);

/// Slate Blue (#6A5ACD)
pub const SLATE_BLUE: Color = Color::from_rgb8(106, 90, 205);

/// White (#FFFFFF)
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

/// Black (#000000)
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

/// Dark neutral (#333333) used for shape borders and panel text.
pub const DARK_BORDER: Color = Color::from_rgb8(51, 51, 51);

/// The selectable fill palette, paired with human-readable names.
///
/// The order is stable (`--list-colors` prints it as-is); the first entry
/// is the default fill.
pub const PALETTE: [(Color, &str); 11] = [
    (TOMATO, "Tomato"),
    (STEEL_BLUE, "Steel Blue"),
    (LIME_GREEN, "Lime Green"),
    (GOLD, "Gold"),
    (BLUE_VIOLET, "Blue Violet"),
    (HOT_PINK, "Hot Pink"),
    (DARK_TURQUOISE, "Dark Turquoise"),
    (CHOCOLATE, "Chocolate"),
    (SLATE_BLUE, "Slate Blue"),
    (WHITE, "White"),
    (BLACK, "Black"),
];
