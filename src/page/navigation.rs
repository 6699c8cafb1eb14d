//! Navbar behavior: mobile menu, scroll hide/show and current-page
//! highlighting.

use crate::dom::Document;

use super::ACTIVE_CLASS;

/// Class of the mobile menu button.
const HAMBURGER_CLASS: &str = "hamburger";
/// Class of the collapsible navigation menu.
const NAV_MENU_CLASS: &str = "nav-menu";
/// Class of individual navigation links.
const NAV_LINK_CLASS: &str = "nav-link";
/// Class of the fixed top navbar.
const NAVBAR_CLASS: &str = "navbar";

/// Scroll offset (px) below which the navbar is never hidden.
const HIDE_THRESHOLD: u32 = 100;

/// Page name assumed when the path carries none.
const DEFAULT_PAGE: &str = "index.html";

/// Navigation state: the mobile menu flag and the last seen scroll offset.
///
/// Everything else lives in the document's classes and styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigation {
    /// モバイルメニューが開いているか
    menu_open: bool,
    /// 直前のスクロールオフセット（スクロール方向の判定用）
    last_scroll_top: u32,
}

impl Navigation {
    /// 新しいナビゲーション状態を作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the mobile menu open or closed.
    pub fn toggle_menu(&mut self, doc: &mut impl Document) {
        self.set_menu(doc, !self.menu_open);
    }

    /// Close the mobile menu. Closing a closed menu is a no-op.
    pub fn close_menu(&mut self, doc: &mut impl Document) {
        self.set_menu(doc, false);
    }

    /// A navigation link was activated; the mobile menu closes.
    pub fn on_nav_link_activated(&mut self, doc: &mut impl Document) {
        self.close_menu(doc);
    }

    /// Whether the mobile menu is currently open.
    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Drive the hamburger and menu classes from the new state.
    fn set_menu(&mut self, doc: &mut impl Document, open: bool) {
        self.menu_open = open;
        let mut targets = doc.query_by_class(HAMBURGER_CLASS);
        targets.extend(doc.query_by_class(NAV_MENU_CLASS));
        for node in targets {
            if open {
                doc.add_class(node, ACTIVE_CLASS);
            } else {
                doc.remove_class(node, ACTIVE_CLASS);
            }
        }
    }

    /// React to a scroll event at offset `scroll_top`.
    ///
    /// Scrolling down past [`HIDE_THRESHOLD`] slides the navbar out of view;
    /// any upward scroll (or staying above the threshold) brings it back.
    pub fn on_scroll(&mut self, doc: &mut impl Document, scroll_top: u32) {
        let hide = scroll_top > self.last_scroll_top && scroll_top > HIDE_THRESHOLD;
        let transform = if hide { "translateY(-100%)" } else { "translateY(0)" };

        for navbar in doc.query_by_class(NAVBAR_CLASS) {
            doc.set_style(navbar, "transform", transform);
        }
        self.last_scroll_top = scroll_top;
    }
}

/// Highlight the nav link matching `current_page`.
///
/// An empty page name (site root) counts as the index page. Every other link
/// loses its highlight.
pub fn highlight_current(doc: &mut impl Document, current_page: &str) {
    let page = if current_page.is_empty() { DEFAULT_PAGE } else { current_page };

    for link in doc.query_by_class(NAV_LINK_CLASS) {
        let href = doc.attr(link, "href").unwrap_or_default();
        if href == page {
            doc.add_class(link, ACTIVE_CLASS);
        } else {
            doc.remove_class(link, ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use crate::dom::{
        ElementSpec,
        MemoryDocument,
        NodeId,
    };

    use super::*;

    fn navbar_page() -> (MemoryDocument, NodeId, NodeId, NodeId) {
        let mut doc = MemoryDocument::new();
        let navbar = doc.insert(ElementSpec::new().class("navbar"));
        let hamburger = doc.insert(ElementSpec::new().class("hamburger"));
        let menu = doc.insert(ElementSpec::new().class("nav-menu"));
        doc.insert(ElementSpec::new().class("nav-link").attr("href", "index.html"));
        doc.insert(ElementSpec::new().class("nav-link").attr("href", "menu.html"));
        doc.insert(ElementSpec::new().class("nav-link").attr("href", "about.html"));
        (doc, navbar, hamburger, menu)
    }

    fn active_hrefs(doc: &MemoryDocument) -> Vec<String> {
        doc.query_by_class("nav-link")
            .into_iter()
            .filter(|link| doc.has_class(*link, "active"))
            .map(|link| doc.attr(link, "href").unwrap())
            .collect()
    }

    #[googletest::test]
    fn toggle_menu_opens_and_closes() {
        let (mut doc, _, hamburger, menu) = navbar_page();
        let mut nav = Navigation::new();

        nav.toggle_menu(&mut doc);
        expect_that!(doc.has_class(hamburger, "active"), eq(true));
        expect_that!(doc.has_class(menu, "active"), eq(true));
        expect_that!(nav.menu_open(), eq(true));

        nav.toggle_menu(&mut doc);
        expect_that!(doc.has_class(hamburger, "active"), eq(false));
        expect_that!(nav.menu_open(), eq(false));
    }

    #[googletest::test]
    fn nav_link_activation_closes_menu() {
        let (mut doc, _, hamburger, menu) = navbar_page();
        let mut nav = Navigation::new();
        nav.toggle_menu(&mut doc);

        nav.on_nav_link_activated(&mut doc);

        expect_that!(doc.has_class(hamburger, "active"), eq(false));
        expect_that!(doc.has_class(menu, "active"), eq(false));

        // Already closed: still closed.
        nav.on_nav_link_activated(&mut doc);
        expect_that!(nav.menu_open(), eq(false));
    }

    #[rstest]
    // Down but still within the threshold: stays visible.
    #[case::shallow_down(&[50, 90], "translateY(0)")]
    // Down past the threshold: hides.
    #[case::deep_down(&[50, 150], "translateY(-100%)")]
    // Down then back up: shows again.
    #[case::down_then_up(&[50, 150, 120], "translateY(0)")]
    // Exactly at the threshold going down: stays visible.
    #[case::at_threshold(&[50, 100], "translateY(0)")]
    fn scroll_controls_navbar_visibility(#[case] offsets: &[u32], #[case] expected: &str) {
        let (mut doc, navbar, _, _) = navbar_page();
        let mut nav = Navigation::new();

        for offset in offsets {
            nav.on_scroll(&mut doc, *offset);
        }

        assert_that!(doc.style(navbar, "transform"), some(eq(expected)));
    }

    #[rstest]
    #[case::explicit_page("menu.html", "menu.html")]
    #[case::site_root("", "index.html")]
    fn highlight_current_marks_one_link(#[case] current: &str, #[case] expected_href: &str) {
        let (mut doc, _, _, _) = navbar_page();

        highlight_current(&mut doc, current);

        assert_that!(active_hrefs(&doc), elements_are![eq(expected_href)]);
    }

    #[googletest::test]
    fn highlight_current_clears_previous_highlight() {
        let (mut doc, _, _, _) = navbar_page();
        highlight_current(&mut doc, "menu.html");

        highlight_current(&mut doc, "about.html");

        expect_that!(active_hrefs(&doc), elements_are![eq("about.html")]);
    }
}
