//! Pure vertex geometry for polygon and star outlines.
//!
//! These functions compute point sequences only; tracing them onto a Cairo
//! context happens in [`super::render`]. Keeping the two apart lets the
//! geometry be unit-tested without a drawing surface.

use std::f64::consts::PI;

use super::shape::ShapeError;

/// A position in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Ordered vertex sequence describing a closed outline.
///
/// The path is implicitly closed: the final vertex connects back to the
/// first. Polygons carry one vertex per side; stars carry two per spike.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexPath {
    points: Vec<Point2D>,
}

impl VertexPath {
    fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// The vertices in draw order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the path carries no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Computes the vertices of a regular polygon inscribed in a circle.
///
/// Even side counts start half a step off the x-axis so a flat edge sits at
/// the bottom; odd counts start at the top so triangles and pentagons point
/// up. Vertex `i` sits at angle `start + i * 2π/sides` on the circle of the
/// given radius around `center`.
///
/// # Errors
/// [`ShapeError::InvalidGeometryParameter`] for `sides < 3` or a
/// non-positive radius.
pub fn regular_polygon_vertices(
    center: Point2D,
    radius: f64,
    sides: u32,
) -> Result<VertexPath, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::InvalidGeometryParameter(format!(
            "polygon needs at least 3 sides, got {sides}"
        )));
    }
    if radius <= 0.0 {
        return Err(ShapeError::InvalidGeometryParameter(format!(
            "polygon radius must be positive, got {radius}"
        )));
    }

    let start = if sides % 2 == 0 {
        PI / sides as f64
    } else {
        1.5 * PI
    };
    let step = 2.0 * PI / sides as f64;

    let points = (0..sides)
        .map(|i| {
            let angle = start + i as f64 * step;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();

    Ok(VertexPath::from_points(points))
}

/// Computes the vertices of a star outline.
///
/// Produces `2 * spikes` vertices starting at the top (`3π/2`) and stepping
/// by `π/spikes`, alternating between the outer and inner radius.
///
/// # Errors
/// [`ShapeError::InvalidGeometryParameter`] for `spikes < 2`, a
/// non-positive inner radius, or an outer radius not exceeding the inner.
pub fn star_vertices(
    center: Point2D,
    outer_radius: f64,
    inner_radius: f64,
    spikes: u32,
) -> Result<VertexPath, ShapeError> {
    if spikes < 2 {
        return Err(ShapeError::InvalidGeometryParameter(format!(
            "star needs at least 2 spikes, got {spikes}"
        )));
    }
    if inner_radius <= 0.0 {
        return Err(ShapeError::InvalidGeometryParameter(format!(
            "star inner radius must be positive, got {inner_radius}"
        )));
    }
    if outer_radius <= inner_radius {
        return Err(ShapeError::InvalidGeometryParameter(format!(
            "star outer radius ({outer_radius}) must exceed inner radius ({inner_radius})"
        )));
    }

    let start = 1.5 * PI;
    let step = PI / spikes as f64;

    let points = (0..2 * spikes)
        .map(|i| {
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            let angle = start + i as f64 * step;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();

    Ok(VertexPath::from_points(points))
}
