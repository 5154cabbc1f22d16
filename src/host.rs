//! Capability interface between the renderer and whatever owns the containers.
//!
//! The renderer only needs to find containers, measure them, attach surfaces,
//! and later find and remove those surfaces again. [`crate::document::Document`]
//! is the in-memory implementation shipped with the crate.

use crate::document::SelectorError;
use crate::draw::Canvas;
use std::fmt;

/// Operations the renderer requires from a host element tree.
pub trait Host {
    /// Handle to an element owned by the host.
    type Element: Copy + Eq + fmt::Debug;

    /// Whether the host can query elements and hold drawing surfaces at all.
    ///
    /// Rendering into a host that returns `false` is a silent no-op.
    fn supports_drawing(&self) -> bool {
        true
    }

    /// All attached elements matching `selector`, in document order.
    fn query(&self, selector: &str) -> Result<Vec<Self::Element>, SelectorError>;

    /// Current width and height of an element in logical pixels.
    fn measure(&self, element: Self::Element) -> (u32, u32);

    /// Physical pixels per logical pixel on the output device.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Physical pixels per logical pixel already provided by surface backing stores.
    fn backing_store_ratio(&self) -> f64 {
        1.0
    }

    /// Appends `canvas` as the last child of `container`, tagged with `marker`.
    fn append_surface(
        &mut self,
        container: Self::Element,
        canvas: Canvas,
        marker: &str,
    ) -> Self::Element;

    /// Children of `container` tagged with `marker`, in order.
    fn marked_children(&self, container: Self::Element, marker: &str) -> Vec<Self::Element>;

    /// Every attached element tagged with `marker`, in document order.
    fn query_marked(&self, marker: &str) -> Vec<Self::Element>;

    /// Detaches `element` from its parent. Detached elements are never queried again.
    fn remove(&mut self, element: Self::Element);
}

/// Which containers an operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<'a, E> {
    /// Resolved against the host with [`Host::query`].
    Selector(&'a str),
    /// Containers already resolved by the caller.
    Elements(Vec<E>),
}

impl<'a, E: Copy> Target<'a, E> {
    /// A single pre-resolved container.
    pub fn element(element: E) -> Self {
        Target::Elements(vec![element])
    }

    /// Resolves the target to concrete containers.
    pub fn resolve<H>(&self, host: &H) -> Result<Vec<E>, SelectorError>
    where
        H: Host<Element = E>,
    {
        match self {
            Target::Selector(selector) => host.query(selector),
            Target::Elements(elements) => Ok(elements.clone()),
        }
    }
}

impl<'a, E> From<&'a str> for Target<'a, E> {
    fn from(selector: &'a str) -> Self {
        Target::Selector(selector)
    }
}

impl<'a, E> From<Vec<E>> for Target<'a, E> {
    fn from(elements: Vec<E>) -> Self {
        Target::Elements(elements)
    }
}
