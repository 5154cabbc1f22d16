//! In-memory element tree implementing [`Host`].
//!
//! Stands in for a browser DOM: elements have a tag, an optional id, classes,
//! and a measured size. Drawing surfaces are stored as `canvas` children.
//! Removed elements stay in the arena but are detached and never matched again.

pub mod selector;

pub use selector::{Selector, SelectorError};

use crate::draw::Canvas;
use crate::host::Host;
use log::debug;

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    width: u32,
    height: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    canvas: Option<Canvas>,
}

impl Node {
    fn new(tag: &str, width: u32, height: u32) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            width,
            height,
            parent: None,
            children: Vec::new(),
            canvas: None,
        }
    }
}

/// A tree of measurable container elements rooted at `body`.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    device_pixel_ratio: f64,
    backing_store_ratio: f64,
    drawing_supported: bool,
}

impl Document {
    /// Creates a document whose `body` measures `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            nodes: vec![Node::new("body", width, height)],
            device_pixel_ratio: 1.0,
            backing_store_ratio: 1.0,
            drawing_supported: true,
        }
    }

    /// Sets the physical-to-logical pixel ratio of the output device.
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Sets the pixel ratio already provided by surface backing stores.
    pub fn with_backing_store_ratio(mut self, ratio: f64) -> Self {
        self.backing_store_ratio = ratio;
        self
    }

    /// Marks the document as lacking drawing capabilities.
    pub fn without_drawing_support(mut self) -> Self {
        self.drawing_supported = false;
        self
    }

    /// The `body` element.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Appends a new element under `parent` and returns its handle.
    pub fn append_element(
        &mut self,
        parent: ElementId,
        tag: &str,
        width: u32,
        height: u32,
    ) -> ElementId {
        self.push_child(parent, Node::new(tag, width, height))
    }

    /// Sets the `id` attribute of an element.
    pub fn set_id(&mut self, element: ElementId, id: &str) {
        self.nodes[element.0].id = Some(id.to_string());
    }

    /// Adds a class to an element (no-op if already present).
    pub fn add_class(&mut self, element: ElementId, class: &str) {
        let classes = &mut self.nodes[element.0].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
    }

    /// Updates the measured size of an element.
    pub fn resize(&mut self, element: ElementId, width: u32, height: u32) {
        let node = &mut self.nodes[element.0];
        node.width = width;
        node.height = height;
    }

    pub fn tag(&self, element: ElementId) -> &str {
        &self.nodes[element.0].tag
    }

    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.nodes[element.0].classes.iter().any(|c| c == class)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        &self.nodes[element.0].children
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes[element.0].parent
    }

    /// Whether the element is still reachable from the root.
    pub fn is_attached(&self, element: ElementId) -> bool {
        let mut current = element;
        loop {
            if current == self.root() {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// The drawing surface held by a `canvas` element.
    pub fn canvas(&self, element: ElementId) -> Option<&Canvas> {
        self.nodes[element.0].canvas.as_ref()
    }

    pub fn canvas_mut(&mut self, element: ElementId) -> Option<&mut Canvas> {
        self.nodes[element.0].canvas.as_mut()
    }

    fn push_child(&mut self, parent: ElementId, mut node: Node) -> ElementId {
        let id = ElementId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Attached descendants of the root matching `selector`, in document order.
    fn select(&self, selector: &Selector) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.nodes[0].children.iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            if selector.matches(&node.tag, node.id.as_deref(), &node.classes) {
                found.push(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }

        found
    }
}

impl Host for Document {
    type Element = ElementId;

    fn supports_drawing(&self) -> bool {
        self.drawing_supported
    }

    fn query(&self, selector: &str) -> Result<Vec<ElementId>, SelectorError> {
        let parsed = Selector::parse(selector)?;
        Ok(self.select(&parsed))
    }

    fn measure(&self, element: ElementId) -> (u32, u32) {
        let node = &self.nodes[element.0];
        (node.width, node.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn backing_store_ratio(&self) -> f64 {
        self.backing_store_ratio
    }

    fn append_surface(
        &mut self,
        container: ElementId,
        canvas: Canvas,
        marker: &str,
    ) -> ElementId {
        let size = canvas.logical_size();
        let mut node = Node::new("canvas", size.width as u32, size.height as u32);
        node.classes.push(marker.to_string());
        node.canvas = Some(canvas);
        let id = self.push_child(container, node);
        debug!("Appended surface {:?} to {:?}", id, container);
        id
    }

    fn marked_children(&self, container: ElementId, marker: &str) -> Vec<ElementId> {
        self.nodes[container.0]
            .children
            .iter()
            .copied()
            .filter(|child| self.has_class(*child, marker))
            .collect()
    }

    fn query_marked(&self, marker: &str) -> Vec<ElementId> {
        self.select(&Selector::class(marker))
    }

    fn remove(&mut self, element: ElementId) {
        let Some(parent) = self.nodes[element.0].parent.take() else {
            return;
        };
        self.nodes[parent.0].children.retain(|child| *child != element);
        debug!("Removed {:?} from {:?}", element, parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::SurfaceLayout;

    fn sample() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new(800, 600);
        let root = doc.root();
        let section = doc.append_element(root, "section", 400, 300);
        doc.set_id(section, "totals");
        let first = doc.append_element(section, "div", 200, 100);
        doc.add_class(first, "brace");
        let second = doc.append_element(root, "div", 50, 50);
        doc.add_class(second, "brace");
        (doc, section, first, second)
    }

    #[test]
    fn query_returns_document_order() {
        let (doc, section, first, second) = sample();
        assert_eq!(doc.query(".brace").unwrap(), vec![first, second]);
        assert_eq!(doc.query("#totals").unwrap(), vec![section]);
        assert_eq!(doc.query("div, section").unwrap(), vec![section, first, second]);
        assert!(doc.query(".missing").unwrap().is_empty());
    }

    #[test]
    fn query_propagates_selector_errors() {
        let (doc, ..) = sample();
        assert!(doc.query("section div").is_err());
    }

    #[test]
    fn measure_reports_size() {
        let (doc, _, first, _) = sample();
        assert_eq!(doc.measure(first), (200, 100));
    }

    #[test]
    fn add_class_is_idempotent() {
        let (mut doc, _, first, _) = sample();
        doc.add_class(first, "brace");
        assert_eq!(doc.nodes[first.0].classes, vec!["brace".to_string()]);
    }

    #[test]
    fn removed_subtree_is_detached() {
        let (mut doc, section, first, second) = sample();
        doc.remove(section);
        assert!(!doc.is_attached(section));
        assert!(!doc.is_attached(first));
        assert!(doc.is_attached(second));
        assert_eq!(doc.query(".brace").unwrap(), vec![second]);

        // removing again is harmless
        doc.remove(section);
        assert_eq!(doc.children(doc.root()), &[second]);
    }

    #[test]
    fn surfaces_are_marked_children() {
        let (mut doc, _, first, second) = sample();
        let canvas = Canvas::new(SurfaceLayout::compute(200, 100, 1.0, 1.0)).unwrap();
        let surface = doc.append_surface(first, canvas, "gullwings");

        assert_eq!(doc.tag(surface), "canvas");
        assert_eq!(doc.parent(surface), Some(first));
        assert_eq!(doc.measure(surface), (200, 100));
        assert_eq!(doc.marked_children(first, "gullwings"), vec![surface]);
        assert!(doc.marked_children(second, "gullwings").is_empty());
        assert_eq!(doc.query_marked("gullwings"), vec![surface]);
        assert!(doc.canvas(surface).is_some());
        assert!(doc.canvas(first).is_none());
    }

    #[test]
    fn capability_flags() {
        let doc = Document::new(10, 10)
            .with_device_pixel_ratio(2.0)
            .with_backing_store_ratio(1.0);
        assert!(doc.supports_drawing());
        assert_eq!(doc.device_pixel_ratio(), 2.0);
        assert!(!Document::new(10, 10).without_drawing_support().supports_drawing());
    }
}
