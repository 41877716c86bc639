use staykit_types::{from_google_maps_format, to_google_maps_format, Coordinate, LatLng};

use super::{Commit, Controlled};

/// Latitude / longitude boxes plus a map picker.
#[derive(Debug, Clone)]
pub struct GeolocationInput {
    value: Controlled<Option<Coordinate>>,
    lat: String,
    lon: String,
}

impl GeolocationInput {
    pub fn controlled(value: Option<Coordinate>) -> Self {
        let value = in_range(value);
        let (lat, lon) = drafts(&value);
        Self { value: Controlled::controlled(value), lat, lon }
    }

    pub fn uncontrolled(default: Option<Coordinate>) -> Self {
        let default = in_range(default);
        let (lat, lon) = drafts(&default);
        Self { value: Controlled::uncontrolled(default), lat, lon }
    }

    pub fn value(&self) -> Option<Coordinate> {
        *self.value.get()
    }

    pub fn lat_draft(&self) -> &str {
        &self.lat
    }

    pub fn lon_draft(&self) -> &str {
        &self.lon
    }

    pub fn input_lat(&mut self, text: impl Into<String>) {
        self.lat = text.into();
    }

    pub fn input_lon(&mut self, text: impl Into<String>) {
        self.lon = text.into();
    }

    /// Commit both drafts. Both empty clears the value; anything that does
    /// not form a valid coordinate reverts the drafts.
    pub fn blur(&mut self) -> Commit<Coordinate> {
        let (lat, lon) = (self.lat.trim(), self.lon.trim());
        if lat.is_empty() && lon.is_empty() {
            return self.commit(None);
        }

        let parsed = lat
            .parse::<f64>()
            .ok()
            .zip(lon.parse::<f64>().ok())
            .and_then(|(lat, lon)| Coordinate::new(lat, lon).ok());
        match parsed {
            Some(c) => self.commit(Some(c)),
            None => {
                (self.lat, self.lon) = drafts(self.value.get());
                Commit::Reverted
            }
        }
    }

    /// A point picked on the map, in the provider's `{lat, lng}` form.
    pub fn pick_on_map(&mut self, point: LatLng) -> Commit<Coordinate> {
        let c = from_google_maps_format(point);
        if c.validate().is_err() {
            return Commit::Rejected;
        }
        self.commit(Some(c))
    }

    /// Where the map should be centred, if anywhere.
    pub fn map_center(&self) -> Option<LatLng> {
        self.value.get().map(to_google_maps_format)
    }

    /// Out-of-range values are treated as no value.
    pub fn sync(&mut self, value: Option<Coordinate>) {
        let value = in_range(value);
        if self.value.is_controlled() {
            (self.lat, self.lon) = drafts(&value);
        }
        self.value.sync(value);
    }

    fn commit(&mut self, next: Option<Coordinate>) -> Commit<Coordinate> {
        (self.lat, self.lon) = drafts(&next);
        if &next == self.value.get() {
            return Commit::Unchanged;
        }
        Commit::Changed(self.value.set(next))
    }
}

/// Values from the wire bypass [`Coordinate::new`].
fn in_range(value: Option<Coordinate>) -> Option<Coordinate> {
    value.filter(|c| c.validate().is_ok())
}

fn drafts(value: &Option<Coordinate>) -> (String, String) {
    match value {
        Some(c) => (c.lat.to_string(), c.lon.to_string()),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_coordinates_commit() {
        let mut geo = GeolocationInput::uncontrolled(None);
        geo.input_lat("41.39");
        geo.input_lon("2.17");
        assert_eq!(geo.blur(), Commit::Changed(Some(Coordinate { lat: 41.39, lon: 2.17 })));
        assert_eq!(geo.map_center(), Some(LatLng { lat: 41.39, lng: 2.17 }));
    }

    #[test]
    fn out_of_range_reverts() {
        let mut geo = GeolocationInput::uncontrolled(Some(Coordinate { lat: 10.0, lon: 20.0 }));
        geo.input_lat("91");
        assert_eq!(geo.blur(), Commit::Reverted);
        assert_eq!(geo.lat_draft(), "10");
        assert_eq!(geo.value(), Some(Coordinate { lat: 10.0, lon: 20.0 }));
    }

    #[test]
    fn map_pick_converts_lng() {
        let mut geo = GeolocationInput::controlled(None);
        let commit = geo.pick_on_map(LatLng { lat: 10.0, lng: 20.0 });
        assert_eq!(commit, Commit::Changed(Some(Coordinate { lat: 10.0, lon: 20.0 })));
        assert_eq!(geo.pick_on_map(LatLng { lat: 0.0, lng: 200.0 }), Commit::Rejected);
    }

    #[test]
    fn clearing_both_drafts_emits_none() {
        let mut geo = GeolocationInput::uncontrolled(Some(Coordinate { lat: 1.0, lon: 1.0 }));
        geo.input_lat("");
        geo.input_lon(" ");
        assert_eq!(geo.blur(), Commit::Changed(None));
        assert_eq!(geo.map_center(), None);
    }

    #[test]
    fn out_of_range_wire_value_is_dropped() {
        let wire: Coordinate = serde_json::from_str(r#"{"lat": 95.0, "lon": 20.0}"#).unwrap();
        let geo = GeolocationInput::controlled(Some(wire));
        assert_eq!(geo.value(), None);
        assert_eq!(geo.lat_draft(), "");
        assert_eq!(geo.map_center(), None);

        let mut geo = GeolocationInput::controlled(Some(Coordinate { lat: 1.0, lon: 2.0 }));
        geo.sync(Some(wire));
        assert_eq!(geo.value(), None);
        geo.sync(Some(Coordinate { lat: 3.0, lon: 4.0 }));
        assert_eq!(geo.lat_draft(), "3");
    }
}
