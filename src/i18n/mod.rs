//! 翻訳・ロケール管理モジュール
//!
//! 翻訳テーブルの読み込み、ロケールの検出・永続化、ドット区切りキーの
//! 解決を担当します。

pub mod detect;
pub mod loader;
pub mod manager;
pub mod store;
pub mod table;

pub use loader::LoadError;
pub use manager::{
    ChangeOutcome,
    LanguageManager,
    LoadOutcome,
};
pub use store::{
    FilePreferenceStore,
    MemoryPreferenceStore,
    PreferenceStore,
};
pub use table::{
    LocaleTree,
    TranslationTable,
};

/// Locale used when detection fails and as the fallback tree for `resolve`.
pub const DEFAULT_LOCALE: &str = "pt";

/// Locales the site ships translations for.
///
/// Browser-locale detection only ever maps into this set; the translation
/// table may carry more (or fewer) locales without affecting detection.
pub const SUPPORTED_LOCALES: [&str; 3] = ["pt", "en", "ko"];

/// Key under which the selected locale is persisted in the preference store.
pub const STORAGE_KEY: &str = "selectedLanguage";

/// Attribute that marks an element as a translation target.
pub const KEY_ATTR: &str = "data-key";

/// Element id of the optional locale-selection control.
pub const SELECTOR_ID: &str = "languageSelect";
