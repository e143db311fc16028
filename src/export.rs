//! PNG export: filename generation and file writing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::config::ExportConfig;
use crate::draw::{Canvas, ShapeKind};

/// Errors while writing the rendered image to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The surface could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),
    /// Filesystem failure while creating the directory or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generate a filename for a rendered shape.
///
/// The name is `<shape>_<timestamp>.<format>`, with the timestamp produced
/// by the chrono format template from the export configuration.
pub fn generate_filename(kind: ShapeKind, config: &ExportConfig) -> String {
    let timestamp = Local::now().format(&config.filename_template);
    format!("{}_{}.{}", kind.slug(), timestamp, config.format)
}

/// The directory exports land in when no explicit output path is given.
pub fn resolve_directory(config: &ExportConfig) -> PathBuf {
    match &config.directory {
        Some(dir) => expand_tilde(dir),
        None => dirs::picture_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join("Shapescriber"),
    }
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve ~ and relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save the canvas as a PNG named after the shape into the configured
/// export directory.
///
/// # Returns
/// Path to the saved file
pub fn save_image(
    canvas: &Canvas,
    kind: ShapeKind,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&resolve_directory(config))?;
    let file_path = directory.join(generate_filename(kind, config));
    save_image_to(canvas, &file_path)?;
    Ok(file_path)
}

/// Save the canvas as a PNG at an explicit path.
pub fn save_image_to(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let image_data = canvas.png_bytes()?;
    log::info!(
        "Saving image to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );

    fs::write(path, &image_data)?;

    // Verify the write
    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {written_size} bytes");

    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_carry_the_shape_slug_and_extension() {
        let config = ExportConfig::default();
        let filename = generate_filename(ShapeKind::Hexagon, &config);
        assert!(filename.starts_with("hexagon_"));
        assert!(filename.ends_with(".png"));
        // The default template embeds the year.
        assert!(filename.contains("20"));
    }

    #[test]
    fn tilde_paths_expand_to_the_home_directory() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with('~'));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn explicit_directory_overrides_the_default() {
        let config = ExportConfig {
            directory: Some("/tmp/shapes".to_string()),
            ..ExportConfig::default()
        };
        assert_eq!(resolve_directory(&config), PathBuf::from("/tmp/shapes"));

        let default_dir = resolve_directory(&ExportConfig::default());
        assert!(default_dir.to_string_lossy().contains("Shapescriber"));
    }

    #[test]
    fn save_image_writes_a_png_into_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::new(16, 16).unwrap();
        canvas.clear([1.0, 1.0, 1.0, 1.0]).unwrap();

        let config = ExportConfig {
            directory: Some(dir.path().to_string_lossy().into_owned()),
            ..ExportConfig::default()
        };
        let path = save_image(&canvas, ShapeKind::Circle, &config).unwrap();

        assert!(path.exists());
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn save_image_to_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/shape.png");
        let canvas = Canvas::new(8, 8).unwrap();

        save_image_to(&canvas, &nested).unwrap();
        assert!(nested.exists());
    }
}
