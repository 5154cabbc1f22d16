//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Surface settings used when the caller does not measure a real container.
///
/// The CLI renders into a single container of `width` x `height` logical pixels.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Container width in logical pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Container height in logical pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Physical pixels per logical pixel of the output (valid range: 0.25 - 8.0)
    /// - 1.0 = standard density
    /// - 2.0 = HiDPI, exported images are twice the logical size
    #[serde(default = "default_ratio")]
    pub device_pixel_ratio: f64,

    /// Pixel ratio already provided by the surface backing store (valid range: 0.25 - 8.0)
    /// Almost always 1.0
    #[serde(default = "default_ratio")]
    pub backing_store_ratio: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            device_pixel_ratio: default_ratio(),
            backing_store_ratio: default_ratio(),
        }
    }
}

/// Where rendered images are written when no explicit path is given.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory for generated images (supports `~/`)
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Filename template (chrono format specifiers, extension added automatically)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    200
}

fn default_height() -> u32 {
    100
}

fn default_ratio() -> f64 {
    1.0
}

fn default_output_directory() -> String {
    "~/Pictures/Gullwings".to_string()
}

fn default_filename_template() -> String {
    "brace_%Y-%m-%d_%H%M%S".to_string()
}
