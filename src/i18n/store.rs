//! Durable preference storage.
//!
//! The browsing host offers a single origin-scoped key-value cell for the
//! selected locale. The boundary is a trait so the behavior layer can be
//! driven with an in-memory store in tests and a file-backed one in the
//! demo binary.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

/// Key-value persistence boundary for user preferences.
///
/// Writes always replace the full value for a key; there are no partial or
/// merge writes, so re-entrant callers cannot observe a torn value.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Storage failures are absorbed by the implementation (logged, not
    /// propagated); preference persistence is best-effort by design.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// 空のストアを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: a flat JSON object persisted whole on every write.
///
/// A missing or corrupt file is treated as an empty store, mirroring how a
/// cleared browser storage behaves.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    /// 永続化先のファイルパス
    path: PathBuf,
    /// 現在のエントリ（ファイル内容のミラー）
    entries: HashMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, loading any existing entries.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Corrupt preference file {:?}, starting empty: {e}", path);
                HashMap::new()
            }),
            Err(e) => {
                tracing::debug!("No preference file at {:?}: {e}", path);
                HashMap::new()
            }
        };

        Self { path: path.to_path_buf(), entries }
    }

    /// Write the full entry map back to disk.
    fn flush(&self) {
        let content = match serde_json::to_string_pretty(&self.entries) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialize preferences: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("Failed to persist preferences to {:?}: {e}", self.path);
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
