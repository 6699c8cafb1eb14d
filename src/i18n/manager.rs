//! 言語管理を行うモジュール

use std::path::Path;

use crate::dom::Document;

use super::store::PreferenceStore;
use super::table::TranslationTable;
use super::{
    DEFAULT_LOCALE,
    KEY_ATTR,
    SELECTOR_ID,
    STORAGE_KEY,
    detect,
    loader,
};

/// Outcome of loading the translation asset.
///
/// Loading never surfaces an error to later operations; a failure is
/// reported once, here, so tests and startup code can assert on the
/// degraded state without inspecting internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The table was fetched and parsed.
    Loaded,
    /// Fetch or parse failed; the table is empty and the default locale is
    /// active. The page stays usable showing raw keys.
    FailedOpen,
}

/// Outcome of a locale-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The locale was switched, persisted and applied to the document.
    Changed,
    /// The requested code is not in the table; nothing was mutated.
    Rejected,
}

/// 言語管理を行う
///
/// アクティブロケール・翻訳テーブル・永続ストアを所有します。ホストは
/// 起動時に一つ構築し、各コンシューマへ明示的に渡してください（グローバル
/// な共有状態にはしない）。
///
/// # 順序の契約
///
/// `load_translations`（成功またはフェイルオープン）が完了してから
/// `detect_language` / `resolve` を呼ぶこと。`init` はこの順序を守ります。
#[derive(Debug, Clone)]
pub struct LanguageManager<S> {
    /// アクティブロケール（テーブルのキー、またはデフォルト）
    current_language: String,
    /// 翻訳テーブル
    table: TranslationTable,
    /// ロケール設定の永続ストア
    store: S,
}

impl<S: PreferenceStore> LanguageManager<S> {
    /// 新しい言語マネージャーを作成
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            current_language: DEFAULT_LOCALE.to_string(),
            table: TranslationTable::default(),
            store,
        }
    }

    /// 起動シーケンスを実行する
    ///
    /// 読み込み → 検出 → セレクター同期 → ページ翻訳 の順。
    pub async fn init(
        &mut self,
        doc: &mut impl Document,
        asset_path: &Path,
        browser_locale: &str,
    ) -> LoadOutcome {
        let outcome = self.load_translations(asset_path).await;
        self.detect_language(browser_locale);
        self.sync_selector(doc);
        self.translate_page(doc);
        outcome
    }

    /// 翻訳テーブルを読み込む（フェイルオープン）
    ///
    /// 失敗時はログに残し、空のテーブルとデフォルトロケールで続行します。
    /// 呼び出し側にエラーは伝播しません。
    pub async fn load_translations(&mut self, asset_path: &Path) -> LoadOutcome {
        match loader::load(asset_path).await {
            Ok(table) => {
                self.table = table;
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::error!("Error loading translations: {e}");
                self.table = TranslationTable::default();
                self.current_language = DEFAULT_LOCALE.to_string();
                LoadOutcome::FailedOpen
            }
        }
    }

    /// ロケールを検出してアクティブにする
    ///
    /// 結果は（変化がなくても）即座にストアへ書き戻されるため、初回訪問の
    /// 検出結果が次回以降に引き継がれます。
    pub fn detect_language(&mut self, browser_locale: &str) -> &str {
        let stored = self.store.get(STORAGE_KEY);
        let code = detect::detect(stored.as_deref(), browser_locale, &self.table);

        tracing::debug!("Detected language: {code} (stored: {stored:?})");
        self.store.set(STORAGE_KEY, &code);
        self.current_language = code;
        self.current_language.as_str()
    }

    /// アクティブロケールを切り替える
    ///
    /// `code` がテーブルにない場合は何も変更せず [`ChangeOutcome::Rejected`]
    /// を返します。現在のロケールが壊れることはありません。
    pub fn change_language(&mut self, doc: &mut impl Document, code: &str) -> ChangeOutcome {
        if !self.table.contains(code) {
            tracing::debug!("Ignoring change to unknown locale: {code}");
            return ChangeOutcome::Rejected;
        }

        self.current_language = code.to_string();
        self.store.set(STORAGE_KEY, code);
        self.translate_page(doc);
        doc.set_lang(code);
        self.sync_selector(doc);
        ChangeOutcome::Changed
    }

    /// ドット区切りキーを解決する
    ///
    /// 失敗しません。どのロケールにも無いキーはそのまま返します。
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.resolve(&self.current_language, key)
    }

    /// `data-key` 属性を持つ全要素のテキストを解決結果で置き換える
    ///
    /// ロケールが変わらない限り何度呼んでも結果は同じ（冪等）。
    pub fn translate_page(&self, doc: &mut impl Document) {
        for node in doc.query_by_attr(KEY_ATTR) {
            if let Some(key) = doc.attr(node, KEY_ATTR) {
                let text = self.resolve(&key);
                doc.set_text(node, text);
            }
        }
    }

    /// 言語セレクターの表示値をアクティブロケールに合わせる
    ///
    /// セレクターが無いページでは何もしません。
    pub fn sync_selector(&self, doc: &mut impl Document) {
        if let Some(select) = doc.element_by_id(SELECTOR_ID) {
            doc.set_value(select, &self.current_language);
        }
    }

    /// 現在のアクティブロケール
    #[must_use]
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// 読み込み済みの翻訳テーブル
    #[must_use]
    pub const fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// 永続ストアへの参照（テストでの検証用）
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
