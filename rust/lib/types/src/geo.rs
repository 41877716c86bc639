//! Geographic coordinates.
//!
//! Internally a point is `{lat, lon}`. Map providers use `{lat, lng}`;
//! the conversion only happens at the widget boundary through
//! [`to_google_maps_format`] / [`from_google_maps_format`].

use serde::{Deserialize, Serialize};

use crate::ValueError;

/// A point on the globe. `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValueError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValueError::Latitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ValueError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Check the range invariant on a value built with struct syntax or
    /// deserialized from the wire.
    pub fn validate(&self) -> Result<(), ValueError> {
        Self::new(self.lat, self.lon).map(|_| ())
    }
}

/// Map provider representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

pub fn to_google_maps_format(c: Coordinate) -> LatLng {
    LatLng { lat: c.lat, lng: c.lon }
}

pub fn from_google_maps_format(p: LatLng) -> Coordinate {
    Coordinate { lat: p.lat, lon: p.lng }
}
