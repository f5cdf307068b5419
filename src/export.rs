//! PNG snapshot export for the drawing surface.
//!
//! Export is a pixel snapshot of the raster surface, independent of the
//! action log: the encoder sees exactly what is on screen, including content
//! preserved across resizes.

use crate::draw::Surface;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for snapshot saving.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory to save snapshots to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Sketchboard"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
///
/// # Returns
/// Generated filename with extension
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Arguments
/// * `directory` - Path to the directory
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve ~ and relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Saves a PNG snapshot of the surface under a timestamped filename.
///
/// # Arguments
/// * `surface` - The live drawing surface
/// * `config` - Save directory and filename settings
///
/// # Returns
/// Path to the saved file
pub fn save_drawing(surface: &Surface, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);

    save_to_path(surface, &file_path)?;

    Ok(file_path)
}

/// Saves a PNG snapshot of the surface to an explicit path.
///
/// The encoder runs against an offscreen copy of the raster, so the live
/// surface is never touched mid-encode.
pub fn save_to_path(surface: &Surface, path: &Path) -> Result<(), ExportError> {
    let snapshot = surface.snapshot().ok_or(ExportError::SurfaceUnavailable)?;

    log::info!(
        "Saving {}x{} snapshot to: {}",
        surface.width(),
        surface.height(),
        path.display()
    );

    let mut file = fs::File::create(path)?;
    snapshot.write_to_png(&mut file)?;

    // Restrict to user read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    let written_size = fs::metadata(path)?.len();
    log::debug!("Snapshot written: {written_size} bytes");

    Ok(())
}
