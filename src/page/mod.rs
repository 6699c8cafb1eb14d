//! ページ挙動モジュール
//!
//! ナビゲーション、カードのフィルタリング、レシピモーダル、FAQ、
//! お問い合わせフォームなど、各ページのイベント駆動の挙動を提供します。
//! どの挙動もドキュメントを引数で受け取り、自前の状態以外を持ちません。

pub mod contact;
pub mod faq;
pub mod menu;
pub mod modal;
pub mod navigation;

pub use contact::{
    Submission,
    SubmitOutcome,
};
pub use modal::Modal;
pub use navigation::Navigation;

/// Class marking the currently highlighted control (nav link, filter button,
/// open FAQ question, visible modal).
pub const ACTIVE_CLASS: &str = "active";
