//! 翻訳アセットの読み込み関数

use std::path::Path;

use thiserror::Error;

use super::table::TranslationTable;

/// Defines errors that may occur while loading the translation asset.
///
/// Callers treat both variants identically (fail-open to the default
/// locale); the distinction exists for logging.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when the asset cannot be fetched.
    #[error("Failed to fetch translation asset: {0}")]
    Fetch(#[from] std::io::Error),
    /// Error when the asset does not parse into a translation table.
    #[error("Failed to parse translation asset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 翻訳アセットを読み込んでパースする
///
/// ページ表示ごとに一度だけ呼ばれる、唯一の非同期 I/O ポイントです。
/// タイムアウトやリトライはありません。失敗時の扱い（フェイルオープン）は
/// 呼び出し側の責務です。
///
/// # Errors
/// - アセット読み込みエラー
/// - JSON パースエラー
pub async fn load(asset_path: &Path) -> Result<TranslationTable, LoadError> {
    tracing::debug!("Loading translations from: {:?}", asset_path);

    let content = tokio::fs::read_to_string(asset_path).await?;
    let table: TranslationTable = serde_json::from_str(&content)?;

    Ok(table)
}
