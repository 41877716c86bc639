//! Field definitions as served by the backend schema.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// ── FieldKind ───────────────────────────────────────────────────────

/// Input type of a field.
///
/// Wire form is the backend's type string (`"translated-text"`,
/// `"belongs-to"`, ...). Strings this build does not know deserialize to
/// [`FieldKind::Unsupported`] instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Integer,
    Decimal,
    Percent,
    Phone,
    Color,
    Time,
    Geo,
    Date,
    DateRange,
    Boolean,
    Picklist,
    TranslatedText,
    BelongsTo,
    Unsupported(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Percent => "percent",
            FieldKind::Phone => "phone",
            FieldKind::Color => "color",
            FieldKind::Time => "time",
            FieldKind::Geo => "geo",
            FieldKind::Date => "date",
            FieldKind::DateRange => "daterange",
            FieldKind::Boolean => "boolean",
            FieldKind::Picklist => "picklist",
            FieldKind::TranslatedText => "translated-text",
            FieldKind::BelongsTo => "belongs-to",
            FieldKind::Unsupported(s) => s,
        }
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "integer" => FieldKind::Integer,
            "decimal" => FieldKind::Decimal,
            "percent" => FieldKind::Percent,
            "phone" => FieldKind::Phone,
            "color" => FieldKind::Color,
            "time" => FieldKind::Time,
            "geo" => FieldKind::Geo,
            "date" => FieldKind::Date,
            "daterange" => FieldKind::DateRange,
            "boolean" => FieldKind::Boolean,
            "picklist" => FieldKind::Picklist,
            "translated-text" => FieldKind::TranslatedText,
            "belongs-to" => FieldKind::BelongsTo,
            _ => FieldKind::Unsupported(s),
        }
    }
}

impl From<FieldKind> for String {
    fn from(k: FieldKind) -> Self {
        match k {
            FieldKind::Unsupported(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Presentation variant of `text` and `translated-text` fields, taken from
/// `spec.options.format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Multiline,
    Html,
}

// ── PossibleValues ──────────────────────────────────────────────────

/// One entry of a picklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PossibleValue {
    pub value: String,
    pub label: String,
}

/// Picklist entries in the order the backend listed them.
///
/// Wire form is an object `{"value": "Label", ...}`; key order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PossibleValues(Vec<PossibleValue>);

impl PossibleValues {
    pub fn iter(&self) -> impl Iterator<Item = &PossibleValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v.value == value)
    }

    pub fn label(&self, value: &str) -> Option<&str> {
        self.0.iter().find(|v| v.value == value).map(|v| v.label.as_str())
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for PossibleValues {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(value, label)| PossibleValue { value: value.into(), label: label.into() })
                .collect(),
        )
    }
}

impl Serialize for PossibleValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for v in &self.0 {
            map.serialize_entry(&v.value, &v.label)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PossibleValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = PossibleValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of value -> label")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((value, label)) = access.next_entry::<String, Value>()? {
                    let label = match label {
                        Value::String(s) => s,
                        Value::Null => value.clone(),
                        other => other.to_string(),
                    };
                    out.push(PossibleValue { value, label });
                }
                Ok(PossibleValues(out))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

// ── FieldDef ────────────────────────────────────────────────────────

/// Free-form per-field options (`format`, `currency`, `max_characters`,
/// ...). Multi-word keys may be written in snake_case or camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Schema metadata for one resource attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default_value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_values: Option<PossibleValues>,

    /// Target resource of a `belongs-to` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relates_to: Option<String>,

    #[serde(default)]
    pub spec: FieldSpec,
}

impl FieldDef {
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            description: None,
            is_required: false,
            default_value: Value::Null,
            possible_values: None,
            relates_to: None,
            spec: FieldSpec::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = value;
        self
    }

    pub fn with_possible_values<K, L>(mut self, values: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        self.possible_values = Some(values.into_iter().collect());
        self
    }

    pub fn relates_to(mut self, resource: impl Into<String>) -> Self {
        self.relates_to = Some(resource.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.spec.options.insert(key.into(), value.into());
        self
    }

    /// Look up an option by its snake_case key, falling back to the
    /// camelCase spelling (`max_characters` / `maxCharacters`).
    pub fn option(&self, key: &str) -> Option<&Value> {
        let options = &self.spec.options;
        options.get(key).or_else(|| {
            let camel = camel_case(key);
            if camel == key {
                None
            } else {
                options.get(&camel)
            }
        })
    }

    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.option(key).and_then(Value::as_str)
    }

    pub fn option_usize(&self, key: &str) -> Option<usize> {
        self.option(key).and_then(Value::as_u64).map(|n| n as usize)
    }

    /// `spec.options.format`: `"multiline"` or `"html"`, anything else is plain.
    pub fn text_format(&self) -> TextFormat {
        match self.option_str("format") {
            Some("multiline") | Some("textarea") => TextFormat::Multiline,
            Some("html") => TextFormat::Html,
            _ => TextFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_wire_strings() {
        for s in [
            "text", "email", "integer", "decimal", "percent", "phone", "color", "time", "geo",
            "date", "daterange", "boolean", "picklist", "translated-text", "belongs-to",
        ] {
            let kind = FieldKind::from(s.to_string());
            assert!(!matches!(kind, FieldKind::Unsupported(_)), "{} should be known", s);
            assert_eq!(kind.as_str(), s);
        }
    }

    #[test]
    fn unknown_kind_is_kept() {
        let kind: FieldKind = serde_json::from_value(json!("signature")).unwrap();
        assert_eq!(kind, FieldKind::Unsupported("signature".into()));
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("signature"));
    }

    #[test]
    fn deserialize_full_field() {
        let field: FieldDef = serde_json::from_value(json!({
            "type": "picklist",
            "label": "Status",
            "description": "Booking status",
            "isRequired": true,
            "defaultValue": "confirmed",
            "possibleValues": {"confirmed": "Confirmed", "cancelled": "Cancelled"},
            "spec": {"options": {"searchable": false}}
        }))
        .unwrap();

        assert_eq!(field.kind, FieldKind::Picklist);
        assert!(field.is_required);
        assert_eq!(field.default_value, json!("confirmed"));
        let values = field.possible_values.as_ref().unwrap();
        let order: Vec<_> = values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(order, vec!["confirmed", "cancelled"]);
        assert_eq!(values.label("cancelled"), Some("Cancelled"));
        assert_eq!(field.option("searchable"), Some(&json!(false)));
    }

    #[test]
    fn minimal_field_defaults() {
        let field: FieldDef = serde_json::from_value(json!({"type": "text"})).unwrap();
        assert_eq!(field.label, "");
        assert!(!field.is_required);
        assert!(field.default_value.is_null());
        assert_eq!(field.text_format(), TextFormat::Plain);
    }

    #[test]
    fn options_accept_camel_case_keys() {
        let def: FieldDef = serde_json::from_value(json!({
            "type": "translated-text",
            "spec": {"options": {"maxCharacters": 5, "minCharacters": 2, "default_calling_code": "34"}}
        }))
        .unwrap();
        assert_eq!(def.option_usize("max_characters"), Some(5));
        assert_eq!(def.option_usize("min_characters"), Some(2));
        assert_eq!(def.option_str("default_calling_code"), Some("34"));
        assert_eq!(def.option("format"), None);

        let both = FieldDef::new(FieldKind::Text, "x")
            .with_option("max_characters", 10)
            .with_option("maxCharacters", 3);
        assert_eq!(both.option_usize("max_characters"), Some(10));
        assert_eq!(camel_case("default_calling_code"), "defaultCallingCode");
    }

    #[test]
    fn text_format_from_options() {
        let f = FieldDef::new(FieldKind::Text, "Notes").with_option("format", "multiline");
        assert_eq!(f.text_format(), TextFormat::Multiline);
        let f = FieldDef::new(FieldKind::Text, "Body").with_option("format", "html");
        assert_eq!(f.text_format(), TextFormat::Html);
    }

    #[test]
    fn possible_values_serialize_in_order() {
        let f = FieldDef::new(FieldKind::Picklist, "Size")
            .with_possible_values([("s", "Small"), ("m", "Medium"), ("l", "Large")]);
        let out = serde_json::to_string(&f.possible_values).unwrap();
        assert_eq!(out, r#"{"s":"Small","m":"Medium","l":"Large"}"#);
    }
}
