//! Curly-brace path construction.
//!
//! The brace is described once in (along, across) coordinates: `along` runs
//! the length of the brace, `across` is the perpendicular depth. [`Axis`]
//! places those pairs on the surface for the configured direction.

use super::path::BracePath;
use super::{Axis, Size};
use crate::settings::Settings;

/// Straight run between a tip and the start of its arm.
const CORNER_RUN: f64 = 10.0;
/// Distance from the pointer offset to the pointer tip along the brace.
const POINTER_INSET: f64 = 20.0;

/// Quantities derived from the surface size and settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BraceMetrics {
    pub axis: Axis,
    /// Half of the spanning dimension; the far tip sits just short of it.
    pub length: f64,
    /// Half of the cross dimension.
    pub edge: f64,
    /// Quarter of the cross dimension; the brace spine runs here.
    pub middle: f64,
    /// Pointer position along the brace, before the fixed inset is added back.
    pub point_offset: f64,
    /// Cross coordinate of both tips.
    pub inner: f64,
    /// Cross coordinate of the pointer tip.
    pub outer: f64,
    /// Corner radius for every rounded corner.
    pub radius: f64,
    pub thickness: f64,
}

impl BraceMetrics {
    pub fn new(size: Size, settings: &Settings) -> Self {
        let axis = settings.direction.axis();
        let length = axis.span(size) / 2.0;
        let cross = axis.cross(size);
        let edge = cross / 2.0;
        let middle = cross / 4.0;

        let inset = POINTER_INSET + settings.thickness;
        let point_offset = if settings.point <= 1.0 {
            length * settings.point - inset
        } else {
            settings.point - inset
        };

        let (inner, outer) = if settings.direction.tips_on_edge() {
            (edge, 0.0)
        } else {
            (0.0, edge)
        };

        Self {
            axis,
            length,
            edge,
            middle,
            point_offset,
            inner,
            outer,
            radius: middle / settings.sharpness,
            thickness: settings.thickness,
        }
    }
}

/// Builds the path of one brace filling a surface of `size` logical pixels.
pub fn brace_path(size: Size, settings: &Settings) -> BracePath {
    let metrics = BraceMetrics::new(size, settings);
    path_from_metrics(&metrics)
}

fn path_from_metrics(m: &BraceMetrics) -> BracePath {
    let at = |along: f64, across: f64| m.axis.place(along, across);
    let t = m.thickness;
    let po = m.point_offset;
    let r = m.radius;
    let mut path = BracePath::new();

    // near tip, bending into the first arm
    path.move_to(at(t, m.inner));
    path.arc_to(at(t, m.middle), at(CORNER_RUN + t, m.middle), r);
    path.line_to(at(CORNER_RUN + po, m.middle));

    // out to the pointer tip and back onto the spine
    let tip = POINTER_INSET + po;
    path.arc_to(at(tip, m.middle), at(tip, m.outer), r);
    path.arc_to(at(tip, m.middle), at(tip + CORNER_RUN, m.middle), r);

    // second arm into the far tip
    let far = m.length - t;
    path.line_to(at(m.length - (CORNER_RUN + t), m.middle));
    path.arc_to(at(far, m.middle), at(far, m.inner), r);
    path.line_to(at(far, m.inner));

    path
}
