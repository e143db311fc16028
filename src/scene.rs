//! One-pass render orchestration: clear, draw the shape, paint the panel.

use log::debug;
use thiserror::Error;

use crate::config::Config;
use crate::draw::{self, Canvas, ShapeError, ShapeParams};
use crate::report::{self, PropertyReport};
use crate::ui;

/// Errors from a full render pass.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The shape parameters were rejected or produced degenerate geometry.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The canvas could not provide a drawing context.
    #[error("failed to create drawing context: {0}")]
    Surface(#[from] cairo::Error),
}

/// Renders one shape onto the canvas and returns its property report.
///
/// The pass is strictly ordered: parameters are validated before any pixel
/// changes, the canvas is cleared to the configured background, the shape is
/// drawn centered, the report is computed, and the property panel is painted
/// last so it always sits on top of the shape.
///
/// # Errors
/// [`SceneError::Shape`] for invalid parameters; [`SceneError::Surface`]
/// when no drawing context can be created. Rejected parameters leave the
/// canvas untouched.
pub fn render(
    canvas: &Canvas,
    params: &ShapeParams,
    config: &Config,
) -> Result<PropertyReport, SceneError> {
    params.validate()?;

    let ctx = canvas.context()?;

    debug!(
        "clearing {}x{} canvas",
        canvas.width(),
        canvas.height()
    );
    draw::clear_canvas(&ctx, config.canvas.background);

    let center = canvas.center();
    debug!(
        "rendering {} (size {:.1}) at ({:.1}, {:.1})",
        params.kind.display_name(),
        params.size,
        center.x,
        center.y
    );
    draw::render_shape(&ctx, params, center, config.render.border_method)?;

    let report = report::build_report(params, &config.report)?;

    debug!("painting property panel ({} lines)", report.lines.len());
    ui::render_property_panel(&ctx, &report, &config.panel, canvas.width());

    Ok(report)
}
