//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used to rasterize a shape:
//! - [`Color`]: RGBA color representation with the named fill palette
//! - [`ShapeKind`] / [`ShapeParams`]: what to draw and with which inputs
//! - [`VertexPath`]: computed outlines for polygon and star shapes
//! - [`Canvas`]: the offscreen image surface everything is drawn onto
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod font;
pub mod geometry;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use font::FontDescriptor;
pub use geometry::{Point2D, VertexPath, regular_polygon_vertices, star_vertices};
pub use render::{clear_canvas, render_shape};
pub use shape::{ShapeError, ShapeKind, ShapeParams};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, DARK_BORDER, PALETTE, WHITE};
