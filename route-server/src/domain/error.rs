//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from loading and HTTP errors.

use super::{StationId, TimeError};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A time field could not be parsed
    #[error("{field}: {source}")]
    InvalidTime {
        field: &'static str,
        source: TimeError,
    },

    /// A weekday name was not recognised
    #[error("unknown day of week: {0:?}")]
    UnknownWeekday(String),

    /// A leg must run on at least one day
    #[error("leg has no days available")]
    NoDaysAvailable,

    /// Invalid leg construction (e.g. blank train id)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Consecutive legs don't meet at the same station
    #[error("leg arriving at {0} does not connect to leg departing {1}")]
    LegsNotConnected(StationId, StationId),

    /// A station is used as a departure point more than once
    #[error("itinerary departs from {0} more than once")]
    RepeatedDeparture(StationId),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,
}
