//! アプリケーション全体の配線
//!
//! 各マネージャーを束ね、元サイトの起動順序（翻訳 → 検出 → セレクター同期
//! → ページ翻訳 → ナビゲーションのハイライト）を一箇所で保証します。

use std::path::Path;

use crate::dom::{
    Document,
    NodeId,
};
use crate::i18n::{
    ChangeOutcome,
    LanguageManager,
    LoadOutcome,
    PreferenceStore,
};
use crate::page::{
    Modal,
    Navigation,
    SubmitOutcome,
    contact,
    faq,
    menu,
    navigation,
};

/// The behavior layer of one page view.
///
/// Owns the language manager and the stateful page behaviors; stateless
/// behaviors (filtering, FAQ, contact form) are forwarded to directly. The
/// host constructs one `App` at startup and routes its UI events here.
#[derive(Debug, Clone)]
pub struct App<S> {
    /// 言語マネージャー
    pub language: LanguageManager<S>,
    /// ナビゲーション状態
    pub navigation: Navigation,
    /// レシピモーダル状態
    pub modal: Modal,
}

impl<S: PreferenceStore> App<S> {
    /// Create the behavior layer over the given preference store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            language: LanguageManager::new(store),
            navigation: Navigation::new(),
            modal: Modal::new(),
        }
    }

    /// Run the startup sequence.
    ///
    /// Translation loading fully completes (success or fail-open) before
    /// detection or any resolution, per the sequencing contract the language
    /// manager relies on.
    pub async fn init(
        &mut self,
        doc: &mut impl Document,
        asset_path: &Path,
        browser_locale: &str,
        current_page: &str,
    ) -> LoadOutcome {
        let outcome = self.language.init(doc, asset_path, browser_locale).await;
        navigation::highlight_current(doc, current_page);
        tracing::debug!("App initialized ({outcome:?}, locale: {})", self.language.current_language());
        outcome
    }

    /// The locale selector changed to `code`.
    pub fn on_language_selected(&mut self, doc: &mut impl Document, code: &str) -> ChangeOutcome {
        self.language.change_language(doc, code)
    }

    /// The page scrolled to `scroll_top`.
    pub fn on_scroll(&mut self, doc: &mut impl Document, scroll_top: u32) {
        self.navigation.on_scroll(doc, scroll_top);
    }

    /// The hamburger button was activated.
    pub fn on_menu_toggled(&mut self, doc: &mut impl Document) {
        self.navigation.toggle_menu(doc);
    }

    /// A navigation link was activated.
    pub fn on_nav_link_activated(&mut self, doc: &mut impl Document) {
        self.navigation.on_nav_link_activated(doc);
    }

    /// A category filter button was activated.
    #[allow(clippy::unused_self)]
    pub fn on_filter_selected(&mut self, doc: &mut impl Document, button: NodeId) {
        menu::select_filter(doc, button);
    }

    /// A recipe card asked for its details.
    pub fn on_recipe_opened(&mut self, doc: &mut impl Document, title: &str, body: &str) {
        self.modal.open(doc, title, body);
    }

    /// Escape was pressed.
    pub fn on_escape(&mut self, doc: &mut impl Document) {
        self.modal.on_escape(doc);
    }

    /// A click landed on `target` (modal backdrop handling).
    pub fn on_click(&mut self, doc: &mut impl Document, target: NodeId) {
        self.modal.on_click(doc, target);
    }

    /// A FAQ question was activated.
    #[allow(clippy::unused_self)]
    pub fn on_faq_toggled(&mut self, doc: &mut impl Document, question: NodeId) {
        faq::toggle_question(doc, question);
    }

    /// The contact form was submitted.
    #[allow(clippy::unused_self)]
    pub fn on_contact_submitted(&mut self, doc: &mut impl Document) -> SubmitOutcome {
        contact::submit(doc)
    }
}
