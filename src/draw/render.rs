//! Cairo-based rendering functions for shapes.

use std::f64::consts::PI;

use super::color::{self, Color};
use super::geometry::{self, Point2D, VertexPath};
use super::shape::{ShapeError, ShapeKind, ShapeParams};
use crate::config::BorderMethod;

/// Ratio of a star's inner radius to its outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// Number of spikes on the star shape.
pub const STAR_SPIKES: u32 = 5;

/// Width factor applied to `size` for the rectangle shape.
pub const RECTANGLE_WIDTH_FACTOR: f64 = 1.5;

/// Height factor applied to `size` for the rectangle shape.
pub const RECTANGLE_HEIGHT_FACTOR: f64 = 0.8;

/// Clears the whole surface to a solid background color.
///
/// Paints with `Operator::Source` so the background replaces whatever the
/// surface held, including its alpha channel.
pub fn clear_canvas(ctx: &cairo::Context, background: [f64; 4]) {
    let [r, g, b, a] = background;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint();
    ctx.set_operator(cairo::Operator::Over);
}

/// Renders a single shape centered at the given point.
///
/// Filled shapes are painted in the fill color and outlined with the dark
/// border color at the configured stroke width. The line shape has no
/// interior and receives only the border stroke.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `params` - Shape kind, size, stroke width, and fill color
/// * `center` - Center of the shape in surface coordinates
/// * `border_method` - How axis-aligned borders are stroked
///
/// # Errors
/// Returns [`ShapeError::InvalidGeometryParameter`] when the parameters
/// describe degenerate geometry (validated again by the generators).
pub fn render_shape(
    ctx: &cairo::Context,
    params: &ShapeParams,
    center: Point2D,
    border_method: BorderMethod,
) -> Result<(), ShapeError> {
    let size = params.size;
    let radius = size / 2.0;

    match params.kind {
        ShapeKind::Circle => render_circle(ctx, center, radius, params),
        ShapeKind::Square => {
            let origin = Point2D::new(center.x - radius, center.y - radius);
            render_box(ctx, origin, size, size, params, border_method);
        }
        ShapeKind::Rectangle => {
            let width = size * RECTANGLE_WIDTH_FACTOR;
            let height = size * RECTANGLE_HEIGHT_FACTOR;
            let origin = Point2D::new(center.x - width / 2.0, center.y - height / 2.0);
            render_box(ctx, origin, width, height, params, border_method);
        }
        ShapeKind::Triangle => {
            let path = geometry::regular_polygon_vertices(center, radius, 3)?;
            render_closed_path(ctx, &path, params);
        }
        ShapeKind::Star => {
            let path =
                geometry::star_vertices(center, radius, radius * STAR_INNER_RATIO, STAR_SPIKES)?;
            render_closed_path(ctx, &path, params);
        }
        ShapeKind::Pentagon => {
            let path = geometry::regular_polygon_vertices(center, radius, 5)?;
            render_closed_path(ctx, &path, params);
        }
        ShapeKind::Hexagon => {
            let path = geometry::regular_polygon_vertices(center, radius, 6)?;
            render_closed_path(ctx, &path, params);
        }
        ShapeKind::Polygon(sides) => {
            let path = geometry::regular_polygon_vertices(center, radius, sides)?;
            render_closed_path(ctx, &path, params);
        }
        ShapeKind::Line => render_line(ctx, center, size, params.stroke_width),
    }

    Ok(())
}

/// Render a filled circle with a border
fn render_circle(ctx: &cairo::Context, center: Point2D, radius: f64, params: &ShapeParams) {
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    fill_and_stroke(ctx, params);
}

/// Render a filled axis-aligned box with a border
///
/// With [`BorderMethod::Rect`] the fill and border are two independent
/// rectangle operations; with [`BorderMethod::Path`] a single path is
/// filled and then stroked, so the border straddles the fill edge.
fn render_box(
    ctx: &cairo::Context,
    origin: Point2D,
    width: f64,
    height: f64,
    params: &ShapeParams,
    border_method: BorderMethod,
) {
    match border_method {
        BorderMethod::Rect => {
            let fill = params.fill_color;
            ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
            ctx.rectangle(origin.x, origin.y, width, height);
            let _ = ctx.fill();

            let border = color::DARK_BORDER;
            ctx.set_source_rgba(border.r, border.g, border.b, border.a);
            ctx.set_line_width(params.stroke_width);
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(origin.x, origin.y, width, height);
            let _ = ctx.stroke();
        }
        BorderMethod::Path => {
            ctx.rectangle(origin.x, origin.y, width, height);
            fill_and_stroke(ctx, params);
        }
    }
}

/// Render a horizontal line through the center
///
/// A line has no interior, so the fill color never applies; the segment
/// gets the same dark border stroke as every other shape's outline.
fn render_line(ctx: &cairo::Context, center: Point2D, size: f64, stroke_width: f64) {
    ctx.move_to(center.x - size, center.y);
    ctx.line_to(center.x + size, center.y);
    stroke_border(ctx, stroke_width);
}

/// Trace a vertex path and fill/stroke it as one closed outline
fn render_closed_path(ctx: &cairo::Context, path: &VertexPath, params: &ShapeParams) {
    if path.is_empty() {
        return;
    }

    trace_path(ctx, path);
    fill_and_stroke(ctx, params);
}

/// Appends a closed vertex path to the current Cairo path.
pub fn trace_path(ctx: &cairo::Context, path: &VertexPath) {
    let points = path.points();
    let Some(first) = points.first() else {
        return;
    };

    ctx.move_to(first.x, first.y);
    for point in &points[1..] {
        ctx.line_to(point.x, point.y);
    }
    ctx.close_path();
}

/// Fill the current path with the shape color, then stroke its border
fn fill_and_stroke(ctx: &cairo::Context, params: &ShapeParams) {
    let fill = params.fill_color;
    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    let _ = ctx.fill_preserve();

    stroke_border(ctx, params.stroke_width);
}

/// Stroke the current path with the dark border color
fn stroke_border(ctx: &cairo::Context, width: f64) {
    let border: Color = color::DARK_BORDER;
    ctx.set_source_rgba(border.r, border.g, border.b, border.a);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    let _ = ctx.stroke();
}
