//! PNG export of rendered surfaces.

use crate::draw::Canvas;
use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a surface to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, extension)
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

/// Writes the canvas backing store to `path` as PNG.
///
/// Creates missing parent directories. The image has the backing resolution,
/// so high-density surfaces export at their physical size.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::info!("Creating output directory: {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    canvas.surface().write_to_png(&mut writer)?;
    writer.flush()?;

    let (width, height) = canvas.backing_size();
    log::info!("Saved {}x{} brace to {}", width, height, path.display());

    Ok(path.to_path_buf())
}
