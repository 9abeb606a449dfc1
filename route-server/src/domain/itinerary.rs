//! Itinerary type.
//!
//! An `Itinerary` is a complete journey from origin to destination made of
//! one or more train legs, with the wait between each pair of legs.

use std::collections::HashSet;
use std::sync::Arc;

use super::{DomainError, Leg, StationId, wait_time};

/// A chain of legs from an origin to a destination.
///
/// Totals are computed once at construction. The total duration is every
/// leg's own travel time plus every wait between consecutive legs.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = source of the next)
/// - No station is departed from twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Arc<Leg>>,
    total_duration_mins: u32,
    total_wait_mins: u32,
}

impl Itinerary {
    /// Build an itinerary from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `legs` is empty
    /// - Consecutive legs don't meet at the same station
    /// - A station is departed from more than once
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{Itinerary, Leg, StationId, TimeOfDay};
    /// use std::sync::Arc;
    ///
    /// let s = |n: &str| StationId::parse(n).unwrap();
    /// let t = |v: &str| TimeOfDay::parse_hhmm(v).unwrap();
    ///
    /// let first = Leg::new("DEL-MUM-01", s("Delhi"), s("Mumbai"), t("08:00"), t("20:00")).unwrap();
    /// let second = Leg::new("MUM-BLR-01", s("Mumbai"), s("Bangalore"), t("14:30"), t("06:30")).unwrap();
    ///
    /// let itinerary = Itinerary::new(vec![Arc::new(first), Arc::new(second)]).unwrap();
    /// assert_eq!(itinerary.transfer_count(), 1);
    /// assert_eq!(itinerary.total_wait_mins(), 1110);
    /// assert_eq!(itinerary.total_duration_mins(), 720 + 1110 + 960);
    /// ```
    pub fn new(legs: Vec<Arc<Leg>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for pair in legs.windows(2) {
            if pair[0].destination != pair[1].source {
                return Err(DomainError::LegsNotConnected(
                    pair[0].destination.clone(),
                    pair[1].source.clone(),
                ));
            }
        }

        let mut departed: HashSet<&StationId> = HashSet::with_capacity(legs.len());
        for leg in &legs {
            if !departed.insert(&leg.source) {
                return Err(DomainError::RepeatedDeparture(leg.source.clone()));
            }
        }

        let travel: u32 = legs.iter().map(|leg| leg.duration_mins()).sum();
        let total_wait_mins: u32 = legs
            .windows(2)
            .map(|pair| wait_time(pair[0].arrival, pair[1].departure))
            .sum();

        Ok(Itinerary {
            legs,
            total_duration_mins: travel + total_wait_mins,
            total_wait_mins,
        })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Arc<Leg>] {
        &self.legs
    }

    /// Returns each leg paired with the wait before boarding it.
    ///
    /// The first leg has no wait.
    pub fn legs_with_waits(&self) -> impl Iterator<Item = (&Arc<Leg>, Option<u32>)> {
        self.legs.iter().enumerate().map(|(i, leg)| {
            let wait = i
                .checked_sub(1)
                .map(|prev| wait_time(self.legs[prev].arrival, leg.departure));
            (leg, wait)
        })
    }

    /// Total journey time in minutes, including waits.
    pub fn total_duration_mins(&self) -> u32 {
        self.total_duration_mins
    }

    /// Total time spent waiting between legs, in minutes.
    pub fn total_wait_mins(&self) -> u32 {
        self.total_wait_mins
    }

    /// Number of changes between trains (legs - 1).
    pub fn transfer_count(&self) -> usize {
        self.legs.len() - 1
    }

    /// Returns true if there are no changes.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Returns the origin station.
    pub fn origin(&self) -> &StationId {
        // Safe: validated non-empty at construction
        &self.legs[0].source
    }

    /// Returns the destination station.
    pub fn destination(&self) -> &StationId {
        // Safe: validated non-empty at construction
        &self.legs[self.legs.len() - 1].destination
    }
}
