//! Library exports for reusing shapescriber subsystems.
//!
//! Exposes the rendering pipeline (canvas, shape dispatch, property reports)
//! alongside the configuration data structures so that external tools can
//! render shapes or share validation logic with the main binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod report;
pub mod scene;
pub mod ui;
pub mod util;

pub use config::Config;
