//! Brace rendering and teardown against a [`Host`].
//!
//! [`render`] resolves settings, then for each container in order provisions one
//! density-compensated [`Canvas`], strokes one brace onto it, and appends it to
//! the container tagged with [`MARKER_CLASS`]. [`teardown`] finds those surfaces
//! again and removes them.

use crate::document::SelectorError;
use crate::draw::{self, Canvas, SurfaceLayout};
use crate::geometry::brace_path;
use crate::host::{Host, Target};
use crate::settings::{Options, Settings};
use log::{debug, warn};
use thiserror::Error;

/// Class carried by every surface this crate creates.
pub const MARKER_CLASS: &str = "gullwings";

/// Errors that abort a render or teardown call.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid target: {0}")]
    Selector(#[from] SelectorError),

    #[error("Cairo drawing failed: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Resolves `options` over the defaults and draws one brace per container.
///
/// Returns the surfaces created, in container order. A host without drawing
/// support yields an empty list and leaves the tree untouched.
pub fn render<H: Host>(
    host: &mut H,
    target: &Target<'_, H::Element>,
    options: &Options,
) -> Result<Vec<H::Element>, RenderError> {
    let settings = Settings::resolve(options);
    render_settings(host, target, &settings)
}

/// Draws one brace per container using already-resolved settings.
///
/// Every call appends new surfaces; existing ones are never reused, so
/// rendering twice stacks two braces. The first failing container aborts the
/// call; surfaces appended before it stay in place.
pub fn render_settings<H: Host>(
    host: &mut H,
    target: &Target<'_, H::Element>,
    settings: &Settings,
) -> Result<Vec<H::Element>, RenderError> {
    if !host.supports_drawing() {
        debug!("Host lacks drawing support, skipping render");
        return Ok(Vec::new());
    }

    if let Err(err) = settings.validate() {
        warn!("Rendering with degenerate settings: {}", err);
    }

    let containers = target.resolve(&*host)?;
    let mut created = Vec::with_capacity(containers.len());

    for container in containers {
        let (width, height) = host.measure(container);
        let layout = SurfaceLayout::compute(
            width,
            height,
            host.device_pixel_ratio(),
            host.backing_store_ratio(),
        );
        let canvas = draw_canvas(layout, settings)?;
        let surface = host.append_surface(container, canvas, MARKER_CLASS);

        debug!(
            "Rendered {} brace into {:?} ({}x{} logical, scale {})",
            settings.direction, container, width, height, layout.scale
        );
        created.push(surface);
    }

    Ok(created)
}

fn draw_canvas(layout: SurfaceLayout, settings: &Settings) -> Result<Canvas, RenderError> {
    let canvas = Canvas::new(layout)?;
    {
        let ctx = canvas.context()?;
        let path = brace_path(canvas.logical_size(), settings);
        draw::render_brace(&ctx, &path, settings)?;
    }
    Ok(canvas)
}

/// Removes marked surfaces and returns how many were removed.
///
/// With a target, only surfaces that are direct children of the targeted
/// containers are removed; everything else in those containers stays. Without
/// one, every marked surface in the host is removed.
pub fn teardown<H: Host>(
    host: &mut H,
    target: Option<&Target<'_, H::Element>>,
) -> Result<usize, RenderError> {
    let surfaces = match target {
        Some(target) => {
            let mut surfaces = Vec::new();
            for container in target.resolve(&*host)? {
                surfaces.extend(host.marked_children(container, MARKER_CLASS));
            }
            surfaces
        }
        None => host.query_marked(MARKER_CLASS),
    };

    for surface in &surfaces {
        host.remove(*surface);
    }

    debug!("Teardown removed {} surface(s)", surfaces.len());
    Ok(surfaces.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, ElementId};
    use crate::settings::Direction;

    fn two_boxes() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new(640, 480);
        let root = doc.root();
        let left = doc.append_element(root, "div", 200, 100);
        doc.add_class(left, "box");
        let right = doc.append_element(root, "div", 120, 240);
        doc.add_class(right, "box");
        (doc, left, right)
    }

    #[test]
    fn render_creates_one_surface_per_container() {
        let (mut doc, left, right) = two_boxes();
        let created = render(&mut doc, &Target::Selector(".box"), &Options::default()).unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(doc.parent(created[0]), Some(left));
        assert_eq!(doc.parent(created[1]), Some(right));
        assert!(created.iter().all(|s| doc.has_class(*s, MARKER_CLASS)));
    }

    #[test]
    fn render_without_drawing_support_is_silent() {
        let mut doc = Document::new(100, 100).without_drawing_support();
        let root = doc.root();
        let target = doc.append_element(root, "div", 100, 100);

        let created = render(&mut doc, &Target::element(target), &Options::default()).unwrap();
        assert!(created.is_empty());
        assert!(doc.children(target).is_empty());
    }

    #[test]
    fn render_with_no_matches_does_nothing() {
        let (mut doc, left, _) = two_boxes();
        let created = render(&mut doc, &Target::Selector(".nothing"), &Options::default()).unwrap();
        assert!(created.is_empty());
        assert!(doc.children(left).is_empty());
    }

    #[test]
    fn render_rejects_bad_selector() {
        let (mut doc, ..) = two_boxes();
        let err = render(&mut doc, &Target::Selector("div .box"), &Options::default());
        assert!(matches!(err, Err(RenderError::Selector(_))));
    }

    #[test]
    fn logical_size_is_density_independent() {
        for ratio in [1.0, 1.5, 2.0, 3.0] {
            let mut doc = Document::new(640, 480).with_device_pixel_ratio(ratio);
            let root = doc.root();
            let target = doc.append_element(root, "div", 200, 100);

            let created = render(&mut doc, &Target::element(target), &Options::default()).unwrap();
            let canvas = doc.canvas(created[0]).unwrap();
            assert_eq!(canvas.logical_size().width, 200.0);
            assert_eq!(canvas.logical_size().height, 100.0);
            assert_eq!(doc.measure(created[0]), (200, 100));
            assert_eq!(
                canvas.backing_size(),
                ((200.0 * ratio) as i32, (100.0 * ratio) as i32)
            );
        }
    }

    #[test]
    fn rendering_twice_stacks_surfaces() {
        let (mut doc, left, _) = two_boxes();
        let target = Target::element(left);
        render(&mut doc, &target, &Options::default()).unwrap();
        render(&mut doc, &target, &Options::default()).unwrap();

        assert_eq!(doc.marked_children(left, MARKER_CLASS).len(), 2);
    }

    #[test]
    fn teardown_specific_leaves_siblings() {
        let (mut doc, left, right) = two_boxes();
        render(&mut doc, &Target::Selector(".box"), &Options::default()).unwrap();

        let removed = teardown(&mut doc, Some(&Target::element(left))).unwrap();
        assert_eq!(removed, 1);
        assert!(doc.marked_children(left, MARKER_CLASS).is_empty());
        assert_eq!(doc.marked_children(right, MARKER_CLASS).len(), 1);
    }

    #[test]
    fn teardown_specific_keeps_unmarked_children() {
        let (mut doc, left, _) = two_boxes();
        let label = doc.append_element(left, "span", 40, 10);
        render(&mut doc, &Target::element(left), &Options::default()).unwrap();

        teardown(&mut doc, Some(&Target::Selector(".box"))).unwrap();
        assert_eq!(doc.children(left), &[label]);
    }

    #[test]
    fn teardown_all_removes_every_marked_surface() {
        let (mut doc, left, right) = two_boxes();
        render(&mut doc, &Target::Selector(".box"), &Options::default()).unwrap();
        render(&mut doc, &Target::element(left), &Options::default()).unwrap();

        assert_eq!(teardown(&mut doc, None).unwrap(), 3);
        assert!(doc.query_marked(MARKER_CLASS).is_empty());
        assert!(doc.children(left).is_empty());
        assert!(doc.children(right).is_empty());
    }

    #[test]
    fn degenerate_settings_still_render() {
        let (mut doc, left, _) = two_boxes();
        let options = Options {
            thickness: Some(-2.0),
            sharpness: Some(0.0),
            direction: Some(Direction::Up),
            ..Options::default()
        };
        let created = render(&mut doc, &Target::element(left), &options).unwrap();
        assert_eq!(created.len(), 1);
    }

    #[test]
    fn brace_leaves_ink_on_the_surface() {
        let (mut doc, left, _) = two_boxes();
        let created = render(&mut doc, &Target::element(left), &Options::default()).unwrap();
        assert!(doc.canvas_mut(created[0]).unwrap().has_ink());
    }
}
