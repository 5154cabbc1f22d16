//! Cairo-based rendering of brace paths.

use crate::geometry::{ArcCorner, BracePath, ResolvedSegment, Sweep};
use crate::settings::Settings;

/// Strokes a brace path with the color and thickness from `settings`.
///
/// The context state is saved and restored around the stroke so settings do not
/// leak into later drawing on the same context.
///
/// # Arguments
/// * `ctx` - Cairo drawing context, in logical pixel units
/// * `path` - Brace path produced by [`crate::geometry::brace_path`]
/// * `settings` - Resolved brace settings (color and thickness are used here)
pub fn render_brace(
    ctx: &cairo::Context,
    path: &BracePath,
    settings: &Settings,
) -> Result<(), cairo::Error> {
    ctx.save()?;

    settings.color.apply(ctx);
    ctx.set_line_width(settings.thickness);
    ctx.new_path();
    trace_path(ctx, path);
    let stroked = ctx.stroke();

    ctx.restore()?;
    stroked
}

/// Appends the path commands to the context's current path without stroking.
pub fn trace_path(ctx: &cairo::Context, path: &BracePath) {
    for segment in path.resolve() {
        match segment {
            ResolvedSegment::Move(point) => ctx.move_to(point.x, point.y),
            ResolvedSegment::Line(point) => ctx.line_to(point.x, point.y),
            ResolvedSegment::Corner(ArcCorner::Line(point)) => ctx.line_to(point.x, point.y),
            ResolvedSegment::Corner(ArcCorner::Arc {
                start,
                center,
                radius,
                start_angle,
                end_angle,
                sweep,
                ..
            }) => {
                ctx.line_to(start.x, start.y);
                match sweep {
                    Sweep::Increasing => {
                        ctx.arc(center.x, center.y, radius, start_angle, end_angle)
                    }
                    Sweep::Decreasing => {
                        ctx.arc_negative(center.x, center.y, radius, start_angle, end_angle)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size, brace_path};

    fn surface_with_context(width: i32, height: i32) -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        (surface, ctx)
    }

    #[test]
    fn traced_path_ends_at_far_tip() {
        let (_surface, ctx) = surface_with_context(200, 100);
        let path = brace_path(Size::new(200.0, 100.0), &Settings::default());
        trace_path(&ctx, &path);

        let (x, y) = ctx.current_point().unwrap();
        let end = path.end().unwrap();
        assert!((x - end.x).abs() < 1e-6 && (y - end.y).abs() < 1e-6);
    }

    #[test]
    fn arc_corner_ends_on_tangent_point() {
        let (_surface, ctx) = surface_with_context(20, 20);
        let mut path = BracePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.arc_to(Point::new(10.0, 0.0), Point::new(10.0, 10.0), 5.0);
        trace_path(&ctx, &path);

        let (x, y) = ctx.current_point().unwrap();
        assert!((x - 10.0).abs() < 1e-6);
        assert!((y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn render_brace_restores_context_state() {
        let (_surface, ctx) = surface_with_context(200, 100);
        ctx.set_line_width(7.0);
        let settings = Settings {
            thickness: 3.0,
            ..Settings::default()
        };
        render_brace(&ctx, &brace_path(Size::new(200.0, 100.0), &settings), &settings).unwrap();
        assert_eq!(ctx.line_width(), 7.0);
    }
}
