//! Configuration file support for gullwings.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/gullwings/config.toml`. Settings include brace defaults,
//! surface size and pixel density, and where rendered images are written.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::{OutputConfig, SurfaceConfig};

use crate::export::expand_tilde;
use crate::settings::Options;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest container dimension accepted from the config file.
const MAX_DIMENSION: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// All tables are optional and fall back to their defaults.
///
/// # Example TOML
/// ```toml
/// [brace]
/// direction = "up"
/// thickness = 2.0
/// color = "#303030"
///
/// [surface]
/// width = 400
/// height = 120
/// device_pixel_ratio = 2.0
///
/// [output]
/// directory = "~/Pictures/Gullwings"
/// filename_template = "brace_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brace options layered over the built-in defaults
    #[serde(default)]
    pub brace: Options,

    /// Container size and pixel density
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Output location for rendered images
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps values to acceptable ranges.
    ///
    /// Brace options are left alone: degenerate brace values render as degenerate
    /// shapes rather than being corrected here.
    ///
    /// Validated ranges:
    /// - `surface.width`, `surface.height`: 1 - 16384
    /// - `surface.device_pixel_ratio`, `surface.backing_store_ratio`: 0.25 - 8.0
    fn validate_and_clamp(&mut self) {
        let surface = &mut self.surface;

        if !(1..=MAX_DIMENSION).contains(&surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-{} range",
                surface.width,
                MAX_DIMENSION
            );
            surface.width = surface.width.clamp(1, MAX_DIMENSION);
        }

        if !(1..=MAX_DIMENSION).contains(&surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-{} range",
                surface.height,
                MAX_DIMENSION
            );
            surface.height = surface.height.clamp(1, MAX_DIMENSION);
        }

        for (name, ratio) in [
            ("device_pixel_ratio", &mut surface.device_pixel_ratio),
            ("backing_store_ratio", &mut surface.backing_store_ratio),
        ] {
            if !(0.25..=8.0).contains(&*ratio) {
                log::warn!("Invalid {} {:.2}, clamping to 0.25-8.0 range", name, ratio);
                // NaN has no nearest bound
                *ratio = if ratio.is_nan() {
                    1.0
                } else {
                    ratio.clamp(0.25, 8.0)
                };
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/gullwings/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("gullwings");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        config.validate_and_clamp();
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Directory where generated images are written, with `~/` expanded.
    pub fn output_directory(&self) -> PathBuf {
        expand_tilde(&self.output.directory)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Direction;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.brace, Options::default());
        assert_eq!(config.surface.width, 200);
        assert_eq!(config.surface.height, 100);
        assert_eq!(config.surface.device_pixel_ratio, 1.0);
        assert_eq!(config.output.filename_template, "brace_%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn brace_table_accepts_unknown_keys() {
        let config = Config::from_toml(
            r#"
            [brace]
            direction = "down"
            sharpness = 3.0
            tooltip = "ignored"
            "#,
        )
        .unwrap();
        assert_eq!(config.brace.direction, Some(Direction::Down));
        assert_eq!(config.brace.sharpness, Some(3.0));
        assert!(config.brace.extra.contains_key("tooltip"));
    }

    #[test]
    fn invalid_direction_is_an_error() {
        assert!(Config::from_toml("[brace]\ndirection = \"diagonal\"").is_err());
    }

    #[test]
    fn clamps_surface_values() {
        let mut config = Config::from_toml(
            r#"
            [surface]
            width = 0
            height = 99999
            device_pixel_ratio = 20.0
            backing_store_ratio = nan
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.surface.width, 1);
        assert_eq!(config.surface.height, MAX_DIMENSION);
        assert_eq!(config.surface.device_pixel_ratio, 8.0);
        assert_eq!(config.surface.backing_store_ratio, 1.0);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[surface]\ndevice_pixel_ratio = 0.1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.surface.device_pixel_ratio, 0.25);
    }

    #[test]
    fn load_from_reports_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn schema_mentions_tables() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("brace"));
        assert!(schema.contains("device_pixel_ratio"));
    }
}
