//! Value objects shared by the staykit form layer and SDK.
//!
//! Form widgets never hold raw strings for structured values. Each widget
//! works with one of these types and only converts to a wire/string shape
//! at its boundary:
//!
//! - [`MultiLanguageValue`]: `locale -> Option<String>` for translated text
//! - [`DateRangeValue`]: optional start/end dates
//! - [`Coordinate`]: `{lat, lon}` (map providers speak [`LatLng`])
//! - [`HexColor`], [`PhoneNumber`], [`Percentage`], [`TimeOfDay`]
//!
//! Plain string newtypes ([`Email`], [`ResourceId`], ...) serialize
//! transparently.

pub mod color;
pub mod daterange;
pub mod geo;
pub mod multilang;
pub mod percent;
pub mod phone;
pub mod time;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

pub use color::{is_valid_hex, normalize_hex_color, HexColor};
pub use daterange::{parse_date, DateRangeValue};
pub use geo::{from_google_maps_format, to_google_maps_format, Coordinate, LatLng};
pub use multilang::MultiLanguageValue;
pub use percent::Percentage;
pub use phone::PhoneNumber;
pub use time::TimeOfDay;

/// Rejected input for one of the value objects in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("invalid hex color: {0}")]
    Color(String),

    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),

    #[error("invalid phone number: {0}")]
    Phone(String),

    #[error("invalid percentage: {0}")]
    Percentage(String),

    #[error("invalid time: {0}")]
    Time(String),

    #[error("invalid date: {0}")]
    Date(String),
}

/// Macro to define a newtype wrapper around String.
macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_newtype!(
    /// Server-assigned record identifier.
    ResourceId
);

string_newtype!(
    /// Email address.
    Email
);

string_newtype!(
    /// Locale code used as a key into multi-language values (e.g. `en`, `es`).
    Locale
);

string_newtype!(
    /// ISO 4217 currency code attached to money fields.
    Currency
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_serde() {
        let email = Email::new("host@example.com");
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"host@example.com\"");

        let back: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "host@example.com");
    }

    #[test]
    fn deref_and_display() {
        let id = ResourceId::new("bk_123");
        assert_eq!(id.len(), 6);
        assert_eq!(format!("{}", id), "bk_123");
    }

    #[test]
    fn default_is_empty() {
        assert!(ResourceId::default().is_empty());
        assert!(Locale::default().is_empty());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValueError::Latitude(91.0).to_string(),
            "latitude 91 out of range [-90, 90]"
        );
        assert_eq!(ValueError::Color("#zz".into()).to_string(), "invalid hex color: #zz");
    }
}
