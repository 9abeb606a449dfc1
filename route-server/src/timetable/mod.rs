//! The leg table searched by the planner.
//!
//! A `Timetable` is an immutable snapshot of legs. Cloning is cheap and
//! filtering produces a new snapshot, so concurrent searches can share one
//! table without coordination.

mod error;
mod record;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use tracing::debug;

use crate::domain::{Leg, StationId};

pub use error::TimetableError;
pub use record::LegRecord;

/// Built-in sample network.
const SAMPLE_TIMETABLE: &str = include_str!("../../data/trains.json");

/// An immutable, shareable table of legs.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    legs: Arc<[Arc<Leg>]>,
}

impl Timetable {
    /// Create a timetable from already-validated legs.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            legs: legs.into_iter().map(Arc::new).collect(),
        }
    }

    /// Validate records into a timetable.
    ///
    /// Fails on the first invalid record, reporting its position.
    pub fn from_records(records: Vec<LegRecord>) -> Result<Self, TimetableError> {
        let legs = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let train_id = record.train_id.clone();
                Leg::try_from(record).map_err(|source| TimetableError::InvalidRecord {
                    index,
                    train_id,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(legs = legs.len(), "Loaded timetable");
        Ok(Self::new(legs))
    }

    /// Parse a JSON array of leg records.
    pub fn from_json_str(json: &str) -> Result<Self, TimetableError> {
        let records: Vec<LegRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a JSON array of leg records from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TimetableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in sample network.
    pub fn sample() -> Result<Self, TimetableError> {
        Self::from_json_str(SAMPLE_TIMETABLE)
    }

    /// Returns all legs in table order.
    pub fn legs(&self) -> &[Arc<Leg>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if there are no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// A new snapshot containing only legs that run on `day`.
    pub fn available_on(&self, day: Weekday) -> Self {
        Self {
            legs: self
                .legs
                .iter()
                .filter(|leg| leg.runs_on(day))
                .cloned()
                .collect(),
        }
    }

    /// Legs running directly from `source` to `destination`, in table order.
    pub fn direct(&self, source: &StationId, destination: &StationId) -> Vec<Arc<Leg>> {
        self.legs
            .iter()
            .filter(|leg| &leg.source == source && &leg.destination == destination)
            .cloned()
            .collect()
    }

    /// Legs departing `source`, grouped by where they go.
    pub fn departures_by_destination(
        &self,
        source: &StationId,
    ) -> BTreeMap<StationId, Vec<Arc<Leg>>> {
        let mut groups: BTreeMap<StationId, Vec<Arc<Leg>>> = BTreeMap::new();
        for leg in self.legs.iter().filter(|leg| &leg.source == source) {
            groups
                .entry(leg.destination.clone())
                .or_default()
                .push(Arc::clone(leg));
        }
        groups
    }

    /// Every station that appears as a source or destination, sorted.
    pub fn stations(&self) -> Vec<StationId> {
        self.legs
            .iter()
            .flat_map(|leg| [&leg.source, &leg.destination])
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
