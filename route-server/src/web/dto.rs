//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg, format_duration};
use crate::planner::{FallbackOutcome, RouteGroups};

/// Message when neither the origin nor its nearby stations reach the destination.
pub const NO_ROUTES_MESSAGE: &str = "No routes found between the specified stations";

/// Message when only nearby stations reach the destination.
pub const NEARBY_ROUTES_MESSAGE: &str =
    "No direct routes found. Showing routes from nearby stations.";

/// Query parameters for `GET /trains`.
#[derive(Debug, Default, Deserialize)]
pub struct TrainsRequest {
    /// Origin station (required)
    pub source: Option<String>,

    /// Destination station
    pub destination: Option<String>,

    /// "true" to search for multi-leg routes
    pub alternative_routes: Option<String>,

    /// Maximum number of changes (defaults to the server setting)
    pub max_transfers: Option<usize>,

    /// Only use trains running on this date's weekday (YYYY-MM-DD)
    pub travel_date: Option<NaiveDate>,
}

impl TrainsRequest {
    /// Returns true if multi-leg routes were asked for.
    pub fn wants_alternatives(&self) -> bool {
        self.alternative_routes
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// A leg within a route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub train_id: String,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub seats_available: u32,

    /// Minutes waited at this leg's source; absent on the first leg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time_at_source: Option<u32>,
}

/// A complete route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub legs: Vec<LegResult>,
    pub total_duration_minutes: u32,
    pub total_wait_time_minutes: u32,
    pub number_of_transfers: usize,

    /// Total duration as "1h 5m"
    pub total_duration_display: String,
}

/// Response for a multi-leg route search.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Routes with no changes
    pub direct_routes: Vec<RouteResult>,

    /// Routes with at least one change, or any route from a nearby station
    pub alternative_routes: Vec<RouteResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response listing known stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl LegResult {
    /// Create from a domain Leg and the wait before boarding it.
    pub fn from_leg(leg: &Leg, wait_time_at_source: Option<u32>) -> Self {
        Self {
            train_id: leg.id.clone(),
            train_name: leg.name.clone(),
            source: leg.source.to_string(),
            destination: leg.destination.to_string(),
            departure_time: leg.departure.to_string(),
            arrival_time: leg.arrival.to_string(),
            seats_available: leg.seats_available,
            wait_time_at_source,
        }
    }
}

impl RouteResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let legs = itinerary
            .legs_with_waits()
            .map(|(leg, wait)| LegResult::from_leg(leg, wait))
            .collect();

        Self {
            legs,
            total_duration_minutes: itinerary.total_duration_mins(),
            total_wait_time_minutes: itinerary.total_wait_mins(),
            number_of_transfers: itinerary.transfer_count(),
            total_duration_display: format_duration(itinerary.total_duration_mins()),
        }
    }
}

impl RoutesResponse {
    /// Build the response for a search outcome.
    ///
    /// Routes from the requested origin are split into direct and
    /// alternative. Routes from nearby stations are all alternatives.
    pub fn from_outcome(outcome: FallbackOutcome) -> Self {
        let itineraries = outcome.result.itineraries;

        if itineraries.is_empty() {
            return Self {
                direct_routes: Vec::new(),
                alternative_routes: Vec::new(),
                message: Some(NO_ROUTES_MESSAGE.to_string()),
            };
        }

        if !outcome.used_alternates.is_empty() {
            return Self {
                direct_routes: Vec::new(),
                alternative_routes: itineraries.iter().map(RouteResult::from_itinerary).collect(),
                message: Some(NEARBY_ROUTES_MESSAGE.to_string()),
            };
        }

        let groups = RouteGroups::partition(itineraries);
        Self {
            direct_routes: groups.direct.iter().map(RouteResult::from_itinerary).collect(),
            alternative_routes: groups
                .alternative
                .iter()
                .map(RouteResult::from_itinerary)
                .collect(),
            message: None,
        }
    }
}
