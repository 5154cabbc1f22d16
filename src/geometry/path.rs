//! Path command sequence produced by the brace geometry.

use super::arc::{ArcCorner, resolve_arc_to};
use super::Point;
use std::fmt;

/// One canvas-style path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Lift the pen and place it at the point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Rounded corner at `corner`, leaving toward `toward` (canvas `arcTo`).
    ArcTo {
        corner: Point,
        toward: Point,
        radius: f64,
    },
}

/// A path command with every `ArcTo` resolved against the pen position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedSegment {
    Move(Point),
    Line(Point),
    Corner(ArcCorner),
}

/// Ordered path commands describing one brace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BracePath {
    pub segments: Vec<PathSegment>,
}

impl BracePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.segments.push(PathSegment::LineTo(point));
    }

    pub fn arc_to(&mut self, corner: Point, toward: Point, radius: f64) {
        self.segments.push(PathSegment::ArcTo {
            corner,
            toward,
            radius,
        });
    }

    /// Where the path begins (the near tip).
    pub fn start(&self) -> Option<Point> {
        match self.segments.first()? {
            PathSegment::MoveTo(point) | PathSegment::LineTo(point) => Some(*point),
            PathSegment::ArcTo { corner, .. } => Some(*corner),
        }
    }

    /// Where the pen rests after the final command (the far tip).
    pub fn end(&self) -> Option<Point> {
        self.resolve().last().map(|segment| match segment {
            ResolvedSegment::Move(point) | ResolvedSegment::Line(point) => *point,
            ResolvedSegment::Corner(corner) => corner.end_point(),
        })
    }

    /// Resolves every `ArcTo` against the pen position that precedes it.
    ///
    /// An `ArcTo` with no current point behaves like a move to its corner.
    pub fn resolve(&self) -> Vec<ResolvedSegment> {
        let mut resolved = Vec::with_capacity(self.segments.len());
        let mut pen: Option<Point> = None;

        for segment in &self.segments {
            let next = match *segment {
                PathSegment::MoveTo(point) => ResolvedSegment::Move(point),
                PathSegment::LineTo(point) => ResolvedSegment::Line(point),
                PathSegment::ArcTo {
                    corner,
                    toward,
                    radius,
                } => match pen {
                    Some(current) => {
                        ResolvedSegment::Corner(resolve_arc_to(current, corner, toward, radius))
                    }
                    None => ResolvedSegment::Move(corner),
                },
            };
            pen = Some(match next {
                ResolvedSegment::Move(point) | ResolvedSegment::Line(point) => point,
                ResolvedSegment::Corner(corner) => corner.end_point(),
            });
            resolved.push(next);
        }

        resolved
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::MoveTo(point) => write!(f, "move_to {}", point),
            PathSegment::LineTo(point) => write!(f, "line_to {}", point),
            PathSegment::ArcTo {
                corner,
                toward,
                radius,
            } => write!(
                f,
                "arc_to {} {} {}",
                corner,
                toward,
                (radius * 1000.0).round() / 1000.0
            ),
        }
    }
}

impl fmt::Display for BracePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            writeln!(f, "{}", segment)?;
        }
        Ok(())
    }
}
