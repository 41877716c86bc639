//! Editing state for the specialised inputs.
//!
//! Every widget follows the same controlled/uncontrolled split: a
//! controlled widget mirrors the value handed in by the form and only
//! changes when the form calls `sync`; an uncontrolled one keeps what the
//! user last committed.

mod daterange;
mod geo;
mod phone;

use std::fmt::Display;
use std::str::FromStr;

use staykit_types::{HexColor, Percentage, TimeOfDay};

pub use daterange::DateRangePicker;
pub use geo::GeolocationInput;
pub use phone::{PhoneInput, INVALID_PHONE};

#[derive(Debug, Clone, PartialEq)]
pub struct Controlled<T> {
    value: T,
    controlled: bool,
}

impl<T: Clone> Controlled<T> {
    pub fn controlled(value: T) -> Self {
        Self { value, controlled: true }
    }

    /// Internal state seeded from a default.
    pub fn uncontrolled(default: T) -> Self {
        Self { value: default, controlled: false }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Record a change made by the user and return the value to emit.
    pub fn set(&mut self, value: T) -> T {
        if !self.controlled {
            self.value = value.clone();
        }
        value
    }

    /// New value from the form. Ignored when uncontrolled.
    pub fn sync(&mut self, value: T) {
        if self.controlled {
            self.value = value;
        }
    }
}

/// Outcome of committing a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit<T> {
    /// Emit this value; `None` clears the field.
    Changed(Option<T>),
    /// Draft matches the current value.
    Unchanged,
    /// Draft was invalid and has been reset to the last valid value.
    Reverted,
    /// Draft was invalid and is kept for the user to fix.
    Rejected,
}

/// A text box over a parseable value: the user edits a draft, blur
/// commits it when it parses and reverts it otherwise.
#[derive(Debug, Clone)]
pub struct ParsedInput<T> {
    value: Controlled<Option<T>>,
    draft: String,
}

pub type ColorInput = ParsedInput<HexColor>;
pub type PercentageInput = ParsedInput<Percentage>;
pub type TimeInput = ParsedInput<TimeOfDay>;

impl<T> ParsedInput<T>
where
    T: FromStr + Display + Clone + PartialEq,
{
    pub fn controlled(value: Option<T>) -> Self {
        let draft = render(&value);
        Self { value: Controlled::controlled(value), draft }
    }

    pub fn uncontrolled(default: Option<T>) -> Self {
        let draft = render(&default);
        Self { value: Controlled::uncontrolled(default), draft }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.get().as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current draft parses (or is empty).
    pub fn is_valid(&self) -> bool {
        let t = self.draft.trim();
        t.is_empty() || t.parse::<T>().is_ok()
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn blur(&mut self) -> Commit<T> {
        let text = self.draft.trim();
        let parsed = if text.is_empty() {
            None
        } else {
            match text.parse::<T>() {
                Ok(v) => Some(v),
                Err(_) => {
                    self.draft = render(self.value.get());
                    return Commit::Reverted;
                }
            }
        };

        // Normalize what the user typed (e.g. `#abc` -> `#AABBCC`).
        self.draft = render(&parsed);
        if &parsed == self.value.get() {
            return Commit::Unchanged;
        }
        Commit::Changed(self.value.set(parsed))
    }

    pub fn sync(&mut self, value: Option<T>) {
        if self.value.is_controlled() {
            self.draft = render(&value);
        }
        self.value.sync(value);
    }
}

fn render<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}
