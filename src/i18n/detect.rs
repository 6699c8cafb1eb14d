//! Locale detection.

use super::table::TranslationTable;
use super::{
    DEFAULT_LOCALE,
    SUPPORTED_LOCALES,
};

/// Pick the locale to activate for this page view.
///
/// Resolution order, each step short-circuiting:
/// 1. A stored preference that is a key of `table`.
/// 2. The two-letter prefix of `browser_locale` (the part before any region
///    subtag, `"en-US"` → `"en"`) when it is one of [`SUPPORTED_LOCALES`].
///    This checks the fixed supported set, not the table, so an unloadable
///    table still detects the locale a later reload would serve.
/// 3. [`DEFAULT_LOCALE`].
#[must_use]
pub fn detect(stored: Option<&str>, browser_locale: &str, table: &TranslationTable) -> String {
    if let Some(code) = stored
        && table.contains(code)
    {
        return code.to_string();
    }

    let prefix = browser_locale.split('-').next().unwrap_or_default();
    if SUPPORTED_LOCALES.contains(&prefix) {
        return prefix.to_string();
    }

    DEFAULT_LOCALE.to_string()
}
