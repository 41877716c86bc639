//! Hex color normalization.
//!
//! Accepted input: `RGB`, `RRGGBB`, with or without a leading `#`, any case.
//! Canonical form: `#RRGGBB` uppercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValueError;

/// Returns true for `#RGB` or `#RRGGBB` (hex digits, any case).
pub fn is_valid_hex(input: &str) -> bool {
    match input.strip_prefix('#') {
        Some(digits) => is_hex_digits(digits),
        None => false,
    }
}

/// Normalize a user-typed color to `#RRGGBB` uppercase.
///
/// Returns `None` when the input is not a 3- or 6-digit hex color.
pub fn normalize_hex_color(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !is_hex_digits(digits) {
        return None;
    }

    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            let c = c.to_ascii_uppercase();
            out.push(c);
            out.push(c);
        }
    } else {
        out.push_str(&digits.to_ascii_uppercase());
    }
    Some(out)
}

fn is_hex_digits(digits: &str) -> bool {
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// A color in canonical `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl FromStr for HexColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex_color(s)
            .map(HexColor)
            .ok_or_else(|| ValueError::Color(s.to_string()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
