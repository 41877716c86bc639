//! Per-locale editing of translated text.
//!
//! [`LanguageTabs`] owns which locale is active and how far each locale's
//! text is from its length bounds. [`MultiLanguageInput`] reads and writes
//! only the active locale and emits the whole mapping on every change.

use serde::Serialize;
use staykit_schema::LocaleList;
use staykit_types::MultiLanguageValue;

use crate::widgets::Controlled;

/// Completeness dot shown next to each tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorColor {
    Gray,
    Red,
    Orange,
    Green,
}

/// Empty (or whitespace only) is gray; over `max` is red; under `min` is
/// orange; anything else is green. Lengths count characters.
pub fn indicator_color(content: &str, min: Option<usize>, max: Option<usize>) -> IndicatorColor {
    if content.trim().is_empty() {
        return IndicatorColor::Gray;
    }
    let len = content.chars().count();
    match (min, max) {
        (_, Some(max)) if len > max => IndicatorColor::Red,
        (Some(min), _) if len < min => IndicatorColor::Orange,
        _ => IndicatorColor::Green,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Layout classes for the tab list.
    pub fn classes(self) -> &'static str {
        match self {
            Orientation::Vertical => "flex flex-col gap-1",
            Orientation::Horizontal => "flex flex-row gap-2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub locale: String,
    pub label: String,
    pub selected: bool,
    pub indicator: IndicatorColor,
}

#[derive(Debug, Clone)]
pub struct LanguageTabs {
    languages: LocaleList,
    selected: Option<String>,
    orientation: Orientation,
    min_characters: Option<usize>,
    max_characters: Option<usize>,
}

impl LanguageTabs {
    /// Starts on the first configured language.
    pub fn new(languages: &LocaleList) -> Self {
        Self {
            selected: languages.first().map(|l| l.locale.to_string()),
            languages: languages.clone(),
            orientation: Orientation::default(),
            min_characters: None,
            max_characters: None,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_characters = min;
        self.max_characters = max;
        self
    }

    pub fn layout(&self) -> Orientation {
        self.orientation
    }

    pub fn selected_locale(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Switch tabs. Locales that are not configured are ignored.
    pub fn select(&mut self, locale: &str) -> bool {
        if !self.languages.contains(locale) {
            return false;
        }
        self.selected = Some(locale.to_string());
        true
    }

    pub fn tabs(&self, value: &MultiLanguageValue) -> Vec<TabView> {
        self.languages
            .iter()
            .map(|lang| {
                let locale = lang.locale.as_str();
                TabView {
                    locale: locale.to_string(),
                    label: lang.international_name.clone(),
                    selected: self.selected.as_deref() == Some(locale),
                    indicator: indicator_color(
                        value.get(locale).unwrap_or(""),
                        self.min_characters,
                        self.max_characters,
                    ),
                }
            })
            .collect()
    }
}

/// Translated text box; `multiline` renders it as a textarea.
#[derive(Debug, Clone)]
pub struct MultiLanguageInput {
    tabs: LanguageTabs,
    value: Controlled<MultiLanguageValue>,
    multiline: bool,
}

impl MultiLanguageInput {
    pub fn controlled(languages: &LocaleList, value: MultiLanguageValue) -> Self {
        Self { tabs: LanguageTabs::new(languages), value: Controlled::controlled(value), multiline: false }
    }

    pub fn uncontrolled(languages: &LocaleList, default: MultiLanguageValue) -> Self {
        Self { tabs: LanguageTabs::new(languages), value: Controlled::uncontrolled(default), multiline: false }
    }

    /// The textarea flavour.
    pub fn textarea(languages: &LocaleList, value: MultiLanguageValue) -> Self {
        Self::controlled(languages, value).multiline(true)
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.tabs = self.tabs.bounds(min, max);
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn tabs(&self) -> &LanguageTabs {
        &self.tabs
    }

    pub fn tab_views(&self) -> Vec<TabView> {
        self.tabs.tabs(self.value.get())
    }

    pub fn select(&mut self, locale: &str) -> bool {
        self.tabs.select(locale)
    }

    pub fn value(&self) -> &MultiLanguageValue {
        self.value.get()
    }

    /// Text of the active locale.
    pub fn text(&self) -> &str {
        self.tabs
            .selected_locale()
            .and_then(|l| self.value.get().get(l))
            .unwrap_or("")
    }

    /// Replace the active locale's text and return the mapping to emit.
    /// `None` when no language is configured.
    pub fn input(&mut self, text: impl Into<String>) -> Option<MultiLanguageValue> {
        let locale = self.tabs.selected_locale()?.to_string();
        let mut next = self.value.get().clone();
        next.set(locale, Some(text.into()));
        Some(self.value.set(next))
    }

    pub fn sync(&mut self, value: MultiLanguageValue) {
        self.value.sync(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staykit_schema::Language;

    fn languages() -> LocaleList {
        LocaleList::new(vec![
            Language::new("en", "English", "en_GB"),
            Language::new("es", "Spanish", "es_ES"),
        ])
    }

    #[test]
    fn indicator_colors() {
        assert_eq!(indicator_color("", Some(5), Some(10)), IndicatorColor::Gray);
        assert_eq!(indicator_color("   ", None, None), IndicatorColor::Gray);
        assert_eq!(indicator_color("hello world!", Some(5), Some(10)), IndicatorColor::Red);
        assert_eq!(indicator_color("hey", Some(5), Some(10)), IndicatorColor::Orange);
        assert_eq!(indicator_color("hello", Some(5), Some(10)), IndicatorColor::Green);
        assert_eq!(indicator_color("x", None, None), IndicatorColor::Green);
        assert_eq!(indicator_color("ab", None, Some(1)), IndicatorColor::Red);
        assert_eq!(indicator_color("ab", Some(5), None), IndicatorColor::Orange);
        assert_eq!(indicator_color("ab", None, None), IndicatorColor::Green);
        // characters, not bytes
        assert_eq!(indicator_color("ñññññ", None, Some(5)), IndicatorColor::Green);
    }

    #[test]
    fn tabs_default_to_first_language() {
        let mut tabs = LanguageTabs::new(&languages());
        assert_eq!(tabs.selected_locale(), Some("en"));
        assert!(!tabs.select("de"));
        assert_eq!(tabs.selected_locale(), Some("en"));
        assert!(tabs.select("es"));
        assert_eq!(tabs.selected_locale(), Some("es"));
    }

    #[test]
    fn tab_views_carry_indicators() {
        let tabs = LanguageTabs::new(&languages()).bounds(Some(3), None);
        let value: MultiLanguageValue = [("en", "Hi")].into_iter().collect();
        let views = tabs.tabs(&value);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].label, "English");
        assert!(views[0].selected);
        assert_eq!(views[0].indicator, IndicatorColor::Orange);
        assert_eq!(views[1].indicator, IndicatorColor::Gray);
    }

    #[test]
    fn input_writes_only_active_locale() {
        let value: MultiLanguageValue = [("en", "a")].into_iter().collect();
        let mut input = MultiLanguageInput::controlled(&languages(), value);
        assert_eq!(input.text(), "a");
        input.select("es");
        assert_eq!(input.text(), "");

        let emitted = input.input("b").unwrap();
        let expected: MultiLanguageValue = [("en", "a"), ("es", "b")].into_iter().collect();
        assert_eq!(emitted, expected);
    }

    #[test]
    fn uncontrolled_accumulates_edits() {
        let mut input = MultiLanguageInput::uncontrolled(&languages(), MultiLanguageValue::new());
        input.input("Hello");
        input.select("es");
        input.input("Hola");
        assert_eq!(input.value().get("en"), Some("Hello"));
        assert_eq!(input.value().get("es"), Some("Hola"));
    }

    #[test]
    fn no_languages_nothing_to_edit() {
        let mut input = MultiLanguageInput::uncontrolled(&LocaleList::default(), MultiLanguageValue::new());
        assert_eq!(input.input("x"), None);
    }

    #[test]
    fn textarea_is_multiline() {
        assert!(MultiLanguageInput::textarea(&languages(), MultiLanguageValue::new()).is_multiline());
        assert_eq!(Orientation::Horizontal.classes(), "flex flex-row gap-2");
    }
}
