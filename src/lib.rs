//! kfood-guide-web
//!
//! K-Food Guide サイトのクライアントサイド挙動レイヤー: 翻訳解決、
//! ロケール検出・永続化、ページ挙動（ナビゲーション、フィルタ、モーダル、
//! フォーム）の実装

pub mod app;
pub mod dom;
pub mod i18n;
pub mod page;

// App を再エクスポート
pub use app::App;
pub use i18n::LanguageManager;
