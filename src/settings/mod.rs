//! Brace settings and their resolution from caller options.
//!
//! [`Options`] is what callers (config file, CLI, library users) hand in: every
//! key optional, unknown keys kept. [`Settings`] is the complete record the
//! renderer consumes, produced fresh by [`Settings::resolve`] for each call.

pub mod enums;

pub use enums::{ColorSpec, Direction};

use crate::draw::Color;
use crate::draw::color::DEFAULT_BRACE_COLOR;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Default line thickness in pixels.
pub const DEFAULT_THICKNESS: f64 = 1.0;
/// Default pointer position (half way along the brace).
pub const DEFAULT_POINT: f64 = 0.5;
/// Default corner sharpness.
pub const DEFAULT_SHARPNESS: f64 = 1.5;

/// Caller-supplied brace options. Missing keys fall back to defaults.
///
/// Keys this crate does not know about are collected into `extra` and carried
/// through to [`Settings::extra`] untouched.
///
/// # Example TOML
/// ```toml
/// direction = "up"
/// thickness = 2.0
/// point = 0.25
/// color = "#303030"
/// sharpness = 2.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Options {
    /// Side the brace tips face: left, right, up, down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    /// Stroke width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,

    /// Pointer position: values up to 1.0 are a fraction of the brace length,
    /// larger values an absolute offset in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,

    /// Stroke color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,

    /// Corner sharpness; the corner radius is the brace depth divided by this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f64>,

    /// Unrecognized keys, passed through without validation
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Options {
    /// Returns a copy of `self` with every key present in `over` replaced.
    pub fn overlay(&self, over: &Options) -> Options {
        let mut merged = self.clone();
        if over.direction.is_some() {
            merged.direction = over.direction;
        }
        if over.thickness.is_some() {
            merged.thickness = over.thickness;
        }
        if over.point.is_some() {
            merged.point = over.point;
        }
        if over.color.is_some() {
            merged.color = over.color.clone();
        }
        if over.sharpness.is_some() {
            merged.sharpness = over.sharpness;
        }
        for (key, value) in &over.extra {
            merged.extra.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// Fully resolved settings for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub direction: Direction,
    pub thickness: f64,
    pub point: f64,
    pub color: Color,
    pub sharpness: f64,
    /// Unknown option keys, carried through from [`Options::extra`].
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            thickness: DEFAULT_THICKNESS,
            point: DEFAULT_POINT,
            color: DEFAULT_BRACE_COLOR,
            sharpness: DEFAULT_SHARPNESS,
            extra: BTreeMap::new(),
        }
    }
}

/// A settings value that would produce degenerate geometry.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("thickness must be a positive number, got {0}")]
    Thickness(f64),

    #[error("sharpness must be a positive number, got {0}")]
    Sharpness(f64),

    #[error("point must be a finite, non-negative number, got {0}")]
    Point(f64),
}

impl Settings {
    /// Resolves caller options over the built-in defaults.
    pub fn resolve(options: &Options) -> Self {
        Self::default().with_overrides(options)
    }

    /// Returns a new record with every key present in `options` replaced.
    ///
    /// Unknown color names keep the base color and log a warning.
    pub fn with_overrides(&self, options: &Options) -> Self {
        let mut resolved = self.clone();

        if let Some(direction) = options.direction {
            resolved.direction = direction;
        }
        if let Some(thickness) = options.thickness {
            resolved.thickness = thickness;
        }
        if let Some(point) = options.point {
            resolved.point = point;
        }
        if let Some(spec) = &options.color {
            match spec.to_color() {
                Some(color) => resolved.color = color,
                None => warn!("Unknown color {:?}, keeping {:?}", spec, self.color),
            }
        }
        if let Some(sharpness) = options.sharpness {
            resolved.sharpness = sharpness;
        }
        for (key, value) in &options.extra {
            resolved.extra.insert(key.clone(), value.clone());
        }

        resolved
    }

    /// Checks for values that produce degenerate or invalid geometry.
    ///
    /// Rendering never calls this as a gate; it only reports.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(SettingsError::Thickness(self.thickness));
        }
        if !self.sharpness.is_finite() || self.sharpness <= 0.0 {
            return Err(SettingsError::Sharpness(self.sharpness));
        }
        if !self.point.is_finite() || self.point < 0.0 {
            return Err(SettingsError::Point(self.point));
        }
        Ok(())
    }
}
