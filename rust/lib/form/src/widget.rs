//! Widget descriptions produced by the dispatcher.

use serde::Serialize;
use staykit_schema::{Language, PossibleValue};
use staykit_types::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Email,
}

/// Relation targets with a dedicated autocomplete picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Account,
    Property,
    Booking,
}

impl Relation {
    /// Map a `relatesTo` target; `None` for targets without a picker.
    pub fn from_target(target: &str) -> Option<Self> {
        match target {
            "account" => Some(Relation::Account),
            "property" => Some(Relation::Property),
            "booking" => Some(Relation::Booking),
            _ => None,
        }
    }

    /// Resource whose `autocomplete` action feeds the picker.
    pub fn resource(self) -> &'static str {
        match self {
            Relation::Account => "account",
            Relation::Property => "property",
            Relation::Booking => "booking",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Relation::Account => "Search accounts...",
            Relation::Property => "Search properties...",
            Relation::Booking => "Search bookings...",
        }
    }
}

/// What to render for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    TextInput {
        input_type: InputType,
    },
    Textarea {
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<usize>,
    },
    RichText,
    NumberInput {
        integer: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    MoneyInput {
        currency: Currency,
    },
    PercentageInput,
    PhoneInput {
        #[serde(skip_serializing_if = "Option::is_none")]
        default_calling_code: Option<String>,
    },
    ColorInput,
    TimeInput,
    GeolocationInput,
    DatePicker,
    DateRangePicker,
    Checkbox,
    Select {
        options: Vec<PossibleValue>,
    },
    MultiLanguageInput {
        languages: Vec<Language>,
        multiline: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_characters: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_characters: Option<usize>,
    },
    RelationSelect {
        relation: Relation,
        placeholder: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        resource_type: Option<String>,
    },
    /// A `belongs-to` field whose target has no picker yet.
    UnsupportedRelation {
        target: String,
    },
}
