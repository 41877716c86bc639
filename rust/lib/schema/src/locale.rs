//! Configured content languages.

use serde::{Deserialize, Serialize};
use staykit_types::Locale;

/// A content language offered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Key into multi-language values (e.g. `en`).
    pub locale: Locale,
    /// English display name (e.g. `Spanish`).
    pub international_name: String,
    /// Full ISO locale (e.g. `es_ES`).
    #[serde(default)]
    pub iso_locale: String,
}

impl Language {
    pub fn new(locale: &str, international_name: &str, iso_locale: &str) -> Self {
        Self {
            locale: Locale::new(locale),
            international_name: international_name.to_string(),
            iso_locale: iso_locale.to_string(),
        }
    }
}

/// Ordered list of configured languages. The first one is the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleList(Vec<Language>);

impl LocaleList {
    pub fn new(languages: Vec<Language>) -> Self {
        Self(languages)
    }

    pub fn first(&self) -> Option<&Language> {
        self.0.first()
    }

    pub fn get(&self, locale: &str) -> Option<&Language> {
        self.0.iter().find(|l| l.locale.as_str() == locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.get(locale).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.0.iter()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|l| l.locale.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_is_default() {
        let list = LocaleList::new(vec![
            Language::new("en", "English", "en_GB"),
            Language::new("es", "Spanish", "es_ES"),
        ]);
        assert_eq!(list.first().unwrap().locale.as_str(), "en");
        assert!(list.contains("es"));
        assert!(!list.contains("de"));
        assert_eq!(list.locales().collect::<Vec<_>>(), vec!["en", "es"]);
    }

    #[test]
    fn deserialize_from_array() {
        let list: LocaleList = serde_json::from_value(serde_json::json!([
            {"locale": "fr", "international_name": "French", "iso_locale": "fr_FR"}
        ]))
        .unwrap();
        assert_eq!(list.get("fr").unwrap().international_name, "French");
    }
}
