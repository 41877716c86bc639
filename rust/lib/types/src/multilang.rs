//! Multi-language text values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Translated text keyed by locale code.
///
/// A locale set to `None` stays present in the mapping; entries are
/// never removed once created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiLanguageValue(BTreeMap<String, Option<String>>);

impl MultiLanguageValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for a locale. Missing and null locales both read as `None`.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).and_then(|v| v.as_deref())
    }

    /// Set the text of one locale, leaving all others untouched.
    pub fn set(&mut self, locale: impl Into<String>, text: Option<String>) {
        self.0.insert(locale.into(), text);
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ensure every locale has an entry, inserting `None` where missing.
    pub fn with_locales<'a>(mut self, locales: impl IntoIterator<Item = &'a str>) -> Self {
        for locale in locales {
            self.0.entry(locale.to_string()).or_insert(None);
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MultiLanguageValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), Some(v.into()))).collect())
    }
}
