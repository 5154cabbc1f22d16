//! Brace geometry: pure coordinate math with no rendering dependencies.
//!
//! - [`Point`] / [`Size`]: plain floating-point coordinates in logical pixels
//! - [`Axis`]: maps (along, across) pairs onto (x, y) for the brace direction
//! - [`brace_path`]: derives the ordered [`PathSegment`]s of one brace
//! - [`resolve_arc_to`]: canvas-style `arcTo` corner resolution

pub mod arc;
pub mod brace;
pub mod path;

pub use arc::{ArcCorner, Sweep, resolve_arc_to};
pub use brace::{BraceMetrics, brace_path};
pub use path::{BracePath, PathSegment, ResolvedSegment};

use std::fmt;

/// A point in logical (device-independent) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", trim_float(self.x), trim_float(self.y))
    }
}

/// Width and height of a drawing area in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which surface axis the brace spans.
///
/// Up/down braces run along the horizontal axis, left/right braces along the
/// vertical one. Geometry is written once in (along, across) terms and placed
/// through [`Axis::place`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Converts an (along, across) pair into surface coordinates.
    pub fn place(self, along: f64, across: f64) -> Point {
        match self {
            Axis::Horizontal => Point::new(along, across),
            Axis::Vertical => Point::new(across, along),
        }
    }

    /// Size of the surface along this axis.
    pub fn span(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Size of the surface perpendicular to this axis.
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }
}

/// Formats a coordinate without a trailing `.0` and with at most three decimals.
fn trim_float(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
