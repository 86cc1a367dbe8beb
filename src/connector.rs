//! Localized connector phrases.
//!
//! This module provides [`Connectors`], the read-only table of translated
//! connector words ("or", "and", ...) used when joining two failure
//! descriptions into one sentence. Translation itself happens upstream; this
//! crate only looks entries up.

use indexmap::IndexMap;

/// Key of the connector joining two disjunction branches.
pub const OR: &str = "or";

/// A read-only lookup of translated connector phrases.
///
/// Built once from the upstream localization layer and shared immutably;
/// nothing in this crate writes to it after construction.
///
/// # Example
///
/// ```rust
/// use disjunct::Connectors;
///
/// let connectors = Connectors::with_or("or");
/// assert_eq!(connectors.lookup("or").unwrap(), "or");
/// assert!(connectors.lookup("and").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectors {
    entries: IndexMap<String, String>,
}

impl Connectors {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding only the `or` connector, the common case.
    pub fn with_or(text: impl Into<String>) -> Self {
        Self::new().insert(OR, text)
    }

    /// Returns a new table with `key` mapped to `text`.
    pub fn insert(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// Looks up the translated text for a connector key.
    ///
    /// # Errors
    ///
    /// Returns [`MissingConnector`] if the key has no translation, so a
    /// missing localization entry surfaces as a typed error instead of a
    /// malformed rendered string.
    pub fn lookup(&self, key: &str) -> Result<&str, MissingConnector> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| MissingConnector {
                key: key.to_string(),
            })
    }
}

/// A connector key had no translation in the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing localization key for connector `{key}`")]
pub struct MissingConnector {
    /// The connector key that was requested.
    pub key: String,
}
