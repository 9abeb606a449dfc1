//! Nearby stations used as fallback origins.
//!
//! When nothing connects a requested origin to its destination, the
//! boundary retries the search from stations close to the origin (e.g. Thane
//! for Mumbai). This module provides the lookup for those alternates.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::StationId;
use crate::timetable::TimetableError;

/// A lookup from a station to nearby alternates, in preference order.
///
/// Nearness is one-directional: listing Thane near Mumbai says nothing
/// about what is near Thane.
#[derive(Debug, Clone, Default)]
pub struct NearbyStations {
    alternates: HashMap<StationId, Vec<StationId>>,
}

impl NearbyStations {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alternate for a station.
    ///
    /// Alternates keep insertion order. Adding the same alternate twice, or
    /// the station itself, has no effect.
    pub fn add(&mut self, station: StationId, alternate: StationId) {
        if station == alternate {
            return;
        }
        let list = self.alternates.entry(station).or_default();
        if !list.contains(&alternate) {
            list.push(alternate);
        }
    }

    /// Get the alternates for a station, empty if none are known.
    pub fn nearby(&self, station: &StationId) -> &[StationId] {
        self.alternates
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of stations with at least one alternate.
    pub fn len(&self) -> usize {
        self.alternates.len()
    }

    /// Returns true if no alternates are known.
    pub fn is_empty(&self) -> bool {
        self.alternates.is_empty()
    }

    /// Parse a JSON object mapping each station to a list of alternates.
    ///
    /// ```
    /// use route_server::domain::StationId;
    /// use route_server::nearby::NearbyStations;
    ///
    /// let nearby = NearbyStations::from_json_str(r#"{"Mumbai": ["Thane", "Kalyan"]}"#).unwrap();
    /// let mumbai = StationId::parse("Mumbai").unwrap();
    /// let names: Vec<&str> = nearby.nearby(&mumbai).iter().map(|s| s.as_str()).collect();
    /// assert_eq!(names, vec!["Thane", "Kalyan"]);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, TimetableError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut nearby = Self::new();
        for (station, alternates) in raw {
            let station = StationId::parse(&station)?;
            for alternate in alternates {
                nearby.add(station.clone(), StationId::parse(&alternate)?);
            }
        }
        Ok(nearby)
    }

    /// Load the JSON form from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TimetableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Builder for creating nearby-station tables.
///
/// Provides a fluent API for adding alternates.
#[derive(Debug, Default)]
pub struct NearbyStationsBuilder {
    inner: NearbyStations,
}

impl NearbyStationsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add alternates for a station. Blank names are skipped.
    pub fn add(mut self, station: &str, alternates: &[&str]) -> Self {
        if let Ok(station) = StationId::parse(station) {
            for alternate in alternates {
                if let Ok(alternate) = StationId::parse(alternate) {
                    self.inner.add(station.clone(), alternate);
                }
            }
        }
        self
    }

    /// Build the nearby-station table.
    pub fn build(self) -> NearbyStations {
        self.inner
    }
}

/// The nearby stations for the built-in sample network.
pub fn sample_nearby_stations() -> NearbyStations {
    NearbyStationsBuilder::new()
        .add("Mumbai", &["Thane", "Kalyan"])
        .add("Delhi", &["Ghaziabad", "Noida"])
        .add("Bangalore", &["Whitefield", "Kengeri"])
        .add("Chennai", &["Tambaram", "Avadi"])
        .add("Kolkata", &["Howrah", "Sealdah"])
        .add("Hyderabad", &["Secunderabad", "Lingampally"])
        .add("Ahmedabad", &["Gandhinagar", "Vadodara"])
        .add("Lucknow", &["Kanpur", "Barabanki"])
        .build()
}
