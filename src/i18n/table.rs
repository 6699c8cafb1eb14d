//! Translation table and key resolution.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use super::DEFAULT_LOCALE;

/// Translations for a single locale: a nested mapping from key segments to
/// leaf strings or subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LocaleTree {
    /// A translated string.
    Leaf(String),
    /// A nested group of translations.
    Branch(HashMap<String, LocaleTree>),
}

impl LocaleTree {
    /// Walk the tree one segment at a time.
    ///
    /// Returns the leaf reached by consuming every segment. A path that runs
    /// out of tree (missing segment, or a leaf reached with segments left
    /// over) or that ends on a subtree yields `None`.
    #[must_use]
    pub fn walk(&self, segments: &[&str]) -> Option<&str> {
        let mut node = self;
        for segment in segments {
            match node {
                Self::Leaf(_) => return None,
                Self::Branch(children) => node = children.get(*segment)?,
            }
        }
        match node {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }
}

/// Mapping from locale code to its [`LocaleTree`].
///
/// Loaded once per page view and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationTable {
    locales: HashMap<String, LocaleTree>,
}

impl TranslationTable {
    /// Build a table from a locale → tree mapping.
    #[must_use]
    pub fn new(locales: HashMap<String, LocaleTree>) -> Self {
        Self { locales }
    }

    /// Whether the table holds no locales at all (the fail-open state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Whether `code` is a locale present in the table.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// The tree for `code`, if present.
    #[must_use]
    pub fn locale(&self, code: &str) -> Option<&LocaleTree> {
        self.locales.get(code)
    }

    /// Resolve a dot-delimited `key` against `locale`.
    ///
    /// If any segment is missing in the `locale` tree, the walk restarts from
    /// the *root* of the default-locale tree and replays every segment. It
    /// deliberately does not resume from the point of failure, so a key whose
    /// intermediate segments exist in one locale but not the other resolves
    /// against whichever tree carries the full path. If both walks fail the
    /// key itself is returned, serving as its own visible placeholder.
    ///
    /// This function never fails; display code may call it unconditionally.
    #[must_use]
    pub fn resolve<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        let segments: Vec<&str> = key.split('.').collect();

        if let Some(tree) = self.locales.get(locale)
            && let Some(value) = tree.walk(&segments)
        {
            return value;
        }

        if let Some(tree) = self.locales.get(DEFAULT_LOCALE)
            && let Some(value) = tree.walk(&segments)
        {
            tracing::debug!(key, locale, "key missing, resolved from default locale");
            return value;
        }

        tracing::debug!(key, locale, "key missing from every locale, showing key verbatim");
        key
    }
}
