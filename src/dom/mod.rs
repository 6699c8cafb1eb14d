//! Document abstraction the behavior layer drives.
//!
//! The presentation (real DOM, templates, CSS) is an external collaborator;
//! this trait is the seam between it and the behavior code. Hosts hand a
//! `Document` to every operation explicitly, so nothing in this crate holds
//! ambient document state.

pub mod memory;

pub use memory::{
    ElementSpec,
    MemoryDocument,
};

/// Opaque handle to an element inside a [`Document`].
///
/// Handles are only meaningful for the document that produced them. A stale
/// or foreign handle degrades to a no-op read/write, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The mutable page surface.
///
/// Queries return elements in document order. Writers are plain mutations;
/// transition effects and rendering stay on the presentation side.
pub trait Document {
    /// All elements bearing the attribute `name`, in document order.
    fn query_by_attr(&self, name: &str) -> Vec<NodeId>;

    /// All elements carrying the class `class`, in document order.
    fn query_by_class(&self, class: &str) -> Vec<NodeId>;

    /// The element with id `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// The value of attribute `name` on `node`.
    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    /// The visible text content of `node`.
    fn text(&self, node: NodeId) -> String;

    /// Replace the visible text content of `node`.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// The control value of `node` (select/input elements).
    fn value(&self, node: NodeId) -> String;

    /// Set the control value of `node`.
    fn set_value(&mut self, node: NodeId, value: &str);

    /// Whether `node` carries the class `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add `class` to `node`. Adding an existing class is a no-op.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove `class` from `node`. Removing an absent class is a no-op.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Toggle `class` on `node`.
    fn toggle_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            self.remove_class(node, class);
        } else {
            self.add_class(node, class);
        }
    }

    /// The inline style `property` of `node`.
    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Set the inline style `property` of `node`.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// The document-wide language attribute.
    fn lang(&self) -> String;

    /// Set the document-wide language attribute.
    fn set_lang(&mut self, code: &str);

    /// Whether body scrolling is currently locked (modal open).
    fn scroll_locked(&self) -> bool;

    /// Lock or unlock body scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
}
