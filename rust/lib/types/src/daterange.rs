//! Date and date-range values.
//!
//! Input accepts `YYYY-MM-DD` or a full RFC 3339 datetime (the date part is
//! kept). Output is always `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValueError;

/// Parse an ISO date or RFC 3339 datetime string into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValueError> {
    let s = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValueError::Date(input.to_string()))
}

/// A possibly half-open range of dates.
///
/// `start <= end` is expected when both are set; callers check it with
/// [`DateRangeValue::is_ordered`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeValue {
    #[serde(default, with = "iso_date")]
    pub start: Option<NaiveDate>,
    #[serde(default, with = "iso_date")]
    pub end: Option<NaiveDate>,
}

impl DateRangeValue {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, ValueError> {
        Ok(Self {
            start: start.map(parse_date).transpose()?,
            end: end.map(parse_date).transpose()?,
        })
    }

    /// True unless both ends are set and `start > end`.
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(s), Some(e)) => s <= e,
            _ => true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Number of nights between start and end, when both are set.
    pub fn nights(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_days()),
            _ => None,
        }
    }
}

mod iso_date {
    use super::*;

    pub fn serialize<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| parse_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
