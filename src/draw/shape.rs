//! Shape selection and per-render sizing parameters.

use super::color::Color;
use thiserror::Error;

/// Errors from shape-name resolution and geometry parameter validation.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Sizing parameters outside the geometric domain (side counts below 3,
    /// non-positive radii/sizes/stroke widths).
    #[error("invalid geometry parameter: {0}")]
    InvalidGeometryParameter(String),

    /// A shape name that does not map to any known [`ShapeKind`].
    #[error("unsupported shape kind: {0}")]
    UnsupportedShapeKind(String),
}

/// Identifies which shape a render request draws.
///
/// Pentagon and hexagon are fixed-count members of the regular-polygon
/// family; `Polygon` carries an arbitrary side count (at least 3). The
/// dispatch over this enum is exhaustive, so an out-of-set tag can only
/// appear at the name-parsing boundary ([`ShapeKind::from_name`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Star,
    Pentagon,
    Hexagon,
    /// Regular polygon with a caller-supplied side count.
    Polygon(u32),
    Line,
}

impl ShapeKind {
    /// Resolves an external shape tag to a kind.
    ///
    /// `polygon_sides` is only consulted for the `"polygon"` tag; the named
    /// kinds carry their own side counts.
    ///
    /// # Errors
    /// [`ShapeError::UnsupportedShapeKind`] when the name is not one of the
    /// enumerated shapes.
    pub fn from_name(name: &str, polygon_sides: u32) -> Result<Self, ShapeError> {
        match name.to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "rectangle" => Ok(Self::Rectangle),
            "triangle" => Ok(Self::Triangle),
            "star" => Ok(Self::Star),
            "pentagon" => Ok(Self::Pentagon),
            "hexagon" => Ok(Self::Hexagon),
            "polygon" => Ok(Self::Polygon(polygon_sides)),
            "line" => Ok(Self::Line),
            other => Err(ShapeError::UnsupportedShapeKind(other.to_string())),
        }
    }

    /// Capitalized name for the report header ("Shape: Hexagon").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Rectangle => "Rectangle",
            Self::Triangle => "Triangle",
            Self::Star => "Star",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Polygon(_) => "Polygon",
            Self::Line => "Line",
        }
    }

    /// Lowercase name used in export filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Star => "star",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Polygon(_) => "polygon",
            Self::Line => "line",
        }
    }

    /// Side count for members of the regular-polygon family.
    ///
    /// Returns `None` for shapes drawn by other means (the triangle is drawn
    /// through the polygon generator but reports its own property family).
    pub fn regular_sides(&self) -> Option<u32> {
        match self {
            Self::Pentagon => Some(5),
            Self::Hexagon => Some(6),
            Self::Polygon(sides) => Some(*sides),
            _ => None,
        }
    }
}

/// Parameters for one render request.
///
/// Constructed fresh by the caller for every render and passed by value;
/// the core keeps no state between requests.
#[derive(Clone, Copy, Debug)]
pub struct ShapeParams {
    /// Which shape to draw.
    pub kind: ShapeKind,
    /// Driving dimension in surface pixels (diameter for circles, side for
    /// squares, bounding diameter for polygons and stars).
    pub size: f64,
    /// Border stroke width in pixels.
    pub stroke_width: f64,
    /// Fill color, normally one of the palette swatches.
    pub fill_color: Color,
}

impl ShapeParams {
    /// Checks the sizing invariants before any drawing side effect.
    ///
    /// # Errors
    /// [`ShapeError::InvalidGeometryParameter`] for non-positive size or
    /// stroke width, or a polygon side count below 3.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.size <= 0.0 {
            return Err(ShapeError::InvalidGeometryParameter(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        if self.stroke_width <= 0.0 {
            return Err(ShapeError::InvalidGeometryParameter(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        if let ShapeKind::Polygon(sides) = self.kind {
            if sides < 3 {
                return Err(ShapeError::InvalidGeometryParameter(format!(
                    "polygon needs at least 3 sides, got {sides}"
                )));
            }
        }
        Ok(())
    }
}
