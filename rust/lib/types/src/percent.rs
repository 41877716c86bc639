//! Percentages in the `0..=100` range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValueError;

/// A percentage, clamped to `0.0..=100.0` and rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Self {
        let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
        Self((clamped * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The percentage as a fraction (`12.5` -> `0.125`).
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Percentage::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> f64 {
        p.0
    }
}

impl FromStr for Percentage {
    type Err = ValueError;

    /// Accepts `"12.5"`, `"12,5"` and `"12.5 %"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().trim_end_matches('%').trim().replace(',', ".");
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Percentage::new)
            .ok_or_else(|| ValueError::Percentage(s.to_string()))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_clamps() {
        assert_eq!("12.5".parse::<Percentage>().unwrap().value(), 12.5);
        assert_eq!("12,5 %".parse::<Percentage>().unwrap().value(), 12.5);
        assert_eq!("150".parse::<Percentage>().unwrap().value(), 100.0);
        assert_eq!("-3".parse::<Percentage>().unwrap().value(), 0.0);
        assert_eq!(Percentage::new(33.3333).value(), 33.33);
        assert!("abc".parse::<Percentage>().is_err());
        assert!("inf".parse::<Percentage>().is_err());
    }

    #[test]
    fn fraction_and_display() {
        let p = Percentage::new(12.5);
        assert_eq!(p.as_fraction(), 0.125);
        assert_eq!(p.to_string(), "12.5%");
    }

    #[test]
    fn wire_values_are_clamped() {
        assert_eq!(serde_json::from_str::<Percentage>("150").unwrap().value(), 100.0);
        assert_eq!(serde_json::from_str::<Percentage>("-1").unwrap().value(), 0.0);
        assert_eq!(serde_json::from_str::<Percentage>("12.3456").unwrap().value(), 12.35);
        assert_eq!(serde_json::to_string(&Percentage::new(12.5)).unwrap(), "12.5");
    }
}
