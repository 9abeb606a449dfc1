//! Retrying a search from nearby stations.
//!
//! When nothing links the requested origin to the destination, each nearby
//! alternate of the origin is tried once and whatever they find is offered
//! instead.

use tracing::info;

use crate::domain::StationId;
use crate::nearby::NearbyStations;

use super::search::{Planner, SearchError, SearchRequest, SearchResult};

/// Outcome of a search that may have fallen back to nearby stations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackOutcome {
    /// Itineraries found, from the requested origin or its alternates.
    pub result: SearchResult,

    /// Alternates that produced at least one itinerary. Empty when the
    /// requested origin had routes of its own.
    pub used_alternates: Vec<StationId>,
}

impl FallbackOutcome {
    /// Returns true if the itineraries come from nearby stations.
    pub fn used_fallback(&self) -> bool {
        !self.used_alternates.is_empty()
    }
}

/// Search, then retry from each nearby alternate if nothing was found.
///
/// Alternate results are concatenated in alternate order, each already
/// sorted by duration. The expansion count covers every search run.
/// A request whose source and destination are the same finds nothing and
/// is not retried.
pub fn search_with_fallback(
    planner: &Planner<'_>,
    request: &SearchRequest,
    nearby: &NearbyStations,
) -> Result<FallbackOutcome, SearchError> {
    let mut result = planner.search(request)?;
    if !result.is_empty() || request.source == request.destination {
        return Ok(FallbackOutcome {
            result,
            used_alternates: Vec::new(),
        });
    }

    let mut used_alternates = Vec::new();
    for alternate in nearby.nearby(&request.source) {
        let retry = planner.search(&request.from_origin(alternate.clone()))?;
        result.expansions += retry.expansions;
        if !retry.is_empty() {
            used_alternates.push(alternate.clone());
            result.itineraries.extend(retry.itineraries);
        }
    }

    if !used_alternates.is_empty() {
        info!(
            source = %request.source,
            destination = %request.destination,
            alternates = ?used_alternates,
            routes = result.itineraries.len(),
            "No routes from requested origin, using nearby stations"
        );
    }

    Ok(FallbackOutcome {
        result,
        used_alternates,
    })
}
