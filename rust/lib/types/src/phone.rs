//! E.164 phone numbers.
//!
//! Parsing is deliberately shallow: separators are stripped, an
//! international prefix (`+` or `00`) is honoured, and national numbers get
//! the default country calling code prepended (dropping one trunk `0`).
//! No per-country numbering plan is applied.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValueError;

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// A phone number in E.164 form (`+` followed by 8..=15 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse user input. `default_calling_code` (e.g. `"34"`) applies to
    /// numbers written without an international prefix.
    pub fn parse(input: &str, default_calling_code: Option<&str>) -> Result<Self, ValueError> {
        let trimmed = input.trim();
        let mut digits = String::with_capacity(trimmed.len());
        let mut plus = false;
        for c in trimmed.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' | '/' => {}
                '+' if digits.is_empty() && !plus => plus = true,
                _ => return Err(ValueError::Phone(input.to_string())),
            }
        }

        let international = if plus {
            digits
        } else if let Some(rest) = digits.strip_prefix("00") {
            rest.to_string()
        } else {
            let code = default_calling_code
                .map(|c| c.trim_start_matches('+'))
                .filter(|c| !c.is_empty())
                .ok_or_else(|| ValueError::Phone(input.to_string()))?;
            let national = digits.strip_prefix('0').unwrap_or(&digits);
            format!("{}{}", code, national)
        };

        if international.starts_with('0')
            || !(MIN_DIGITS..=MAX_DIGITS).contains(&international.len())
        {
            return Err(ValueError::Phone(input.to_string()));
        }
        Ok(Self(format!("+{}", international)))
    }

    /// E.164 string, e.g. `+34600111222`.
    pub fn as_e164(&self) -> &str {
        &self.0
    }

    /// True when the number starts with the given calling code.
    pub fn has_calling_code(&self, code: &str) -> bool {
        self.0[1..].starts_with(code.trim_start_matches('+'))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PhoneNumber::parse(&raw, None).map_err(serde::de::Error::custom)
    }
}
