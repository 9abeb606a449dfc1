//! Ordering and grouping of search results.

use crate::domain::Itinerary;

/// Sort itineraries by total duration, shortest first.
///
/// The sort is stable: equally long itineraries keep discovery order.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(|itinerary| itinerary.total_duration_mins());
    itineraries
}

/// Itineraries split by whether they need a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGroups {
    /// Itineraries with no changes.
    pub direct: Vec<Itinerary>,

    /// Itineraries with one or more changes.
    pub alternative: Vec<Itinerary>,
}

impl RouteGroups {
    /// Partition itineraries, preserving their order within each group.
    pub fn partition(itineraries: Vec<Itinerary>) -> Self {
        let (direct, alternative): (Vec<_>, Vec<_>) =
            itineraries.into_iter().partition(Itinerary::is_direct);
        Self {
            direct,
            alternative,
        }
    }

    /// Returns true if neither group has any itineraries.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.alternative.is_empty()
    }
}
