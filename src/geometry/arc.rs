//! Rounded-corner resolution with HTML canvas `arcTo` semantics.
//!
//! Cairo has no `arc_to`, so each corner is resolved here into either a plain
//! line or a line-plus-arc pair that Cairo can draw directly.

use super::Point;

/// Cross products below this are treated as collinear legs.
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Angular direction for Cairo's `arc` (increasing) or `arc_negative` (decreasing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    Increasing,
    Decreasing,
}

/// Result of resolving one `arcTo` corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcCorner {
    /// Degenerate corner: draw a straight line to the corner point.
    Line(Point),
    /// Straight line to `start`, then a circular arc ending at `end`.
    Arc {
        start: Point,
        end: Point,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        sweep: Sweep,
    },
}

impl ArcCorner {
    /// The point where the pen rests after this corner.
    pub fn end_point(&self) -> Point {
        match *self {
            ArcCorner::Line(point) => point,
            ArcCorner::Arc { end, .. } => end,
        }
    }
}

/// Resolves an `arcTo(corner, toward, radius)` issued from `current`.
///
/// The arc is tangent to the leg `current -> corner` and to the leg
/// `corner -> toward`. Coincident points, collinear legs, and radii that are
/// zero, negative, or non-finite collapse to a line to `corner`.
pub fn resolve_arc_to(current: Point, corner: Point, toward: Point, radius: f64) -> ArcCorner {
    if !radius.is_finite() || radius <= 0.0 || current == corner || corner == toward {
        return ArcCorner::Line(corner);
    }

    let (in_x, in_y) = unit(current.x - corner.x, current.y - corner.y);
    let (out_x, out_y) = unit(toward.x - corner.x, toward.y - corner.y);

    let cross = in_x * out_y - in_y * out_x;
    if cross.abs() < COLLINEAR_EPSILON {
        return ArcCorner::Line(corner);
    }

    // Angle between the two legs as seen from the corner.
    let cos_theta = (in_x * out_x + in_y * out_y).clamp(-1.0, 1.0);
    let half = cos_theta.acos() / 2.0;

    let tangent_distance = radius / half.tan();
    let start = Point::new(
        corner.x + in_x * tangent_distance,
        corner.y + in_y * tangent_distance,
    );
    let end = Point::new(
        corner.x + out_x * tangent_distance,
        corner.y + out_y * tangent_distance,
    );

    let (bis_x, bis_y) = unit(in_x + out_x, in_y + out_y);
    let center_distance = radius / half.sin();
    let center = Point::new(
        corner.x + bis_x * center_distance,
        corner.y + bis_y * center_distance,
    );

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let end_angle = (end.y - center.y).atan2(end.x - center.x);

    let turn = (start.x - center.x) * (end.y - center.y) - (start.y - center.y) * (end.x - center.x);
    let sweep = if turn >= 0.0 {
        Sweep::Increasing
    } else {
        Sweep::Decreasing
    };

    ArcCorner::Arc {
        start,
        end,
        center,
        radius,
        start_angle,
        end_angle,
        sweep,
    }
}

fn unit(x: f64, y: f64) -> (f64, f64) {
    let len = x.hypot(y);
    if len == 0.0 { (0.0, 0.0) } else { (x / len, y / len) }
}
