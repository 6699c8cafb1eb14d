//! Recipe-detail modal: open/close state and its document side effects.

use crate::dom::{
    Document,
    NodeId,
};

use super::ACTIVE_CLASS;

/// Element id of the modal container.
const MODAL_ID: &str = "recipeModal";
/// Element id of the modal title slot.
const TITLE_ID: &str = "modalTitle";
/// Element id of the modal body slot.
const CONTENT_ID: &str = "modalContent";

/// Modal open/close state.
///
/// The recipe content (title and body strings) is supplied by the caller;
/// this type only manages presentation state: slot population, visibility,
/// the `active` class and the body scroll lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modal {
    /// モーダルが開いているか
    open: bool,
}

impl Modal {
    /// 新しいモーダル状態を作成（閉じた状態）
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open the modal with `title` and `body`.
    ///
    /// Requires the modal container and both slots to exist; on a page
    /// without them this is a no-op. Body scrolling locks while open.
    pub fn open(&mut self, doc: &mut impl Document, title: &str, body: &str) {
        let (Some(modal), Some(title_slot), Some(content_slot)) = (
            doc.element_by_id(MODAL_ID),
            doc.element_by_id(TITLE_ID),
            doc.element_by_id(CONTENT_ID),
        ) else {
            tracing::debug!("Modal markup missing, ignoring open request");
            return;
        };

        doc.set_text(title_slot, title);
        doc.set_text(content_slot, body);
        doc.set_style(modal, "display", "flex");
        doc.set_scroll_locked(true);
        doc.add_class(modal, ACTIVE_CLASS);
        self.open = true;
    }

    /// Close the modal and release the scroll lock.
    ///
    /// Closing an already-closed modal is a no-op, so a stray Escape press
    /// never touches the document.
    pub fn close(&mut self, doc: &mut impl Document) {
        if !self.open {
            return;
        }
        if let Some(modal) = doc.element_by_id(MODAL_ID) {
            doc.remove_class(modal, ACTIVE_CLASS);
            doc.set_style(modal, "display", "none");
        }
        doc.set_scroll_locked(false);
        self.open = false;
    }

    /// Escape was pressed anywhere on the page.
    pub fn on_escape(&mut self, doc: &mut impl Document) {
        self.close(doc);
    }

    /// A click landed on `target` while the modal may be open.
    ///
    /// Only a click on the modal container itself (the backdrop) closes;
    /// clicks inside the content are ignored.
    pub fn on_click(&mut self, doc: &mut impl Document, target: NodeId) {
        if doc.element_by_id(MODAL_ID) == Some(target) {
            self.close(doc);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use crate::dom::{
        ElementSpec,
        MemoryDocument,
        NodeId,
    };

    use super::*;

    fn modal_page() -> (MemoryDocument, NodeId, NodeId, NodeId) {
        let mut doc = MemoryDocument::new();
        let modal = doc.insert(ElementSpec::new().id("recipeModal").class("modal"));
        let title = doc.insert(ElementSpec::new().id("modalTitle"));
        let content = doc.insert(ElementSpec::new().id("modalContent"));
        (doc, modal, title, content)
    }

    #[googletest::test]
    fn open_populates_slots_and_locks_scroll() {
        let (mut doc, modal_el, title, content) = modal_page();
        let mut modal = Modal::new();

        modal.open(&mut doc, "Kimchi Pancake (김치전)", "Panqueca crocante de kimchi.");

        expect_that!(modal.is_open(), eq(true));
        expect_that!(doc.text(title), eq("Kimchi Pancake (김치전)"));
        expect_that!(doc.text(content), eq("Panqueca crocante de kimchi."));
        expect_that!(doc.style(modal_el, "display"), some(eq("flex")));
        expect_that!(doc.has_class(modal_el, "active"), eq(true));
        expect_that!(doc.scroll_locked(), eq(true));
    }

    #[googletest::test]
    fn close_hides_and_unlocks() {
        let (mut doc, modal_el, _, _) = modal_page();
        let mut modal = Modal::new();
        modal.open(&mut doc, "t", "b");

        modal.close(&mut doc);

        expect_that!(modal.is_open(), eq(false));
        expect_that!(doc.style(modal_el, "display"), some(eq("none")));
        expect_that!(doc.has_class(modal_el, "active"), eq(false));
        expect_that!(doc.scroll_locked(), eq(false));
    }

    #[googletest::test]
    fn closing_a_closed_modal_is_a_noop() {
        let (mut doc, modal_el, _, _) = modal_page();
        let mut modal = Modal::new();

        modal.close(&mut doc);
        modal.on_escape(&mut doc);

        expect_that!(doc.style(modal_el, "display"), none());
        expect_that!(doc.scroll_locked(), eq(false));
    }

    #[googletest::test]
    fn escape_closes_an_open_modal() {
        let (mut doc, _, _, _) = modal_page();
        let mut modal = Modal::new();
        modal.open(&mut doc, "t", "b");

        modal.on_escape(&mut doc);

        expect_that!(modal.is_open(), eq(false));
    }

    #[googletest::test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let (mut doc, modal_el, _, content) = modal_page();
        let mut modal = Modal::new();
        modal.open(&mut doc, "t", "b");

        modal.on_click(&mut doc, content);
        expect_that!(modal.is_open(), eq(true));

        modal.on_click(&mut doc, modal_el);
        expect_that!(modal.is_open(), eq(false));
    }

    #[googletest::test]
    fn open_without_modal_markup_is_a_noop() {
        let mut doc = MemoryDocument::new();
        let mut modal = Modal::new();

        modal.open(&mut doc, "t", "b");

        expect_that!(modal.is_open(), eq(false));
        expect_that!(doc.scroll_locked(), eq(false));
    }
}
