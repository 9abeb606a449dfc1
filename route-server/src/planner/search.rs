//! Depth-first route search.
//!
//! Finds every simple chain of legs from an origin to a destination with at
//! most a given number of changes. The search keeps its own stack of
//! partial routes rather than recursing, so the change limit alone bounds
//! how deep it goes.

use std::collections::{HashMap, HashSet};
use std::iter;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{DomainError, Itinerary, Leg, StationId};

use super::config::SearchConfig;
use super::rank::rank_itineraries;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The connecting search examined more legs than allowed
    #[error("search abandoned after examining {limit} legs")]
    BudgetExhausted { limit: usize },

    /// A chain of legs failed itinerary validation
    #[error("invalid itinerary: {0}")]
    InvalidItinerary(#[from] DomainError),
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the journey starts.
    pub source: StationId,

    /// Where the journey ends.
    pub destination: StationId,

    /// Maximum number of changes between trains.
    pub max_transfers: usize,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(source: StationId, destination: StationId, max_transfers: usize) -> Self {
        Self {
            source,
            destination,
            max_transfers,
        }
    }

    /// The same request starting from a different station.
    pub fn from_origin(&self, source: StationId) -> Self {
        Self {
            source,
            ..self.clone()
        }
    }
}

/// Result of route search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Found itineraries, shortest total duration first.
    pub itineraries: Vec<Itinerary>,

    /// Number of legs examined by the connecting search.
    pub expansions: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no itineraries were found.
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }
}

/// A partial route waiting to be extended.
struct Frame<'r> {
    /// Station the route currently ends at.
    station: &'r StationId,

    /// Stations already departed from, including `station`.
    visited: HashSet<&'r StationId>,

    /// Legs taken so far.
    path: Vec<&'r Arc<Leg>>,

    /// Changes made so far (equal to `path.len()`).
    transfers: usize,
}

/// Work left on the search stack.
enum Step<'r> {
    /// Extend a partial route by every leg leaving its station.
    Extend(Frame<'r>),

    /// Report a complete route.
    Emit(Itinerary),
}

/// Route planner over a borrowed leg table.
pub struct Planner<'a> {
    config: &'a SearchConfig,
    departures: HashMap<&'a StationId, Vec<&'a Arc<Leg>>>,
}

impl<'a> Planner<'a> {
    /// Create a planner, indexing legs by departure station.
    ///
    /// Legs from the same station keep their table order.
    pub fn new(legs: &'a [Arc<Leg>], config: &'a SearchConfig) -> Self {
        let mut departures: HashMap<&'a StationId, Vec<&'a Arc<Leg>>> = HashMap::new();
        for leg in legs {
            departures.entry(&leg.source).or_default().push(leg);
        }

        Self { config, departures }
    }

    /// Search for itineraries matching the request.
    ///
    /// Direct legs are always collected. The connecting search runs when
    /// there are none, or whenever changes are allowed. A request whose
    /// source and destination are the same finds nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the connecting search exceeds the configured
    /// expansion budget.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        if request.source == request.destination {
            debug!(
                station = %request.source,
                "Source and destination are the same, nothing to search"
            );
            return Ok(SearchResult::empty());
        }

        let mut itineraries = self.find_direct(request)?;
        let direct = itineraries.len();

        let mut expansions = 0;
        if itineraries.is_empty() || request.max_transfers > 0 {
            expansions = self.find_connecting(request, &mut itineraries)?;
        }

        debug!(
            source = %request.source,
            destination = %request.destination,
            max_transfers = request.max_transfers,
            direct,
            connecting = itineraries.len() - direct,
            expansions,
            "Route search complete"
        );

        Ok(SearchResult {
            itineraries: rank_itineraries(itineraries),
            expansions,
        })
    }

    /// Legs departing `station`, in table order.
    fn departures_from(&self, station: &StationId) -> &[&'a Arc<Leg>] {
        self.departures
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every leg running straight from source to destination.
    fn find_direct(&self, request: &SearchRequest) -> Result<Vec<Itinerary>, SearchError> {
        self.departures_from(&request.source)
            .iter()
            .filter(|leg| leg.destination == request.destination)
            .map(|&leg| Itinerary::new(vec![Arc::clone(leg)]).map_err(SearchError::from))
            .collect()
    }

    /// Depth-first search for chains of two or more legs.
    ///
    /// Appends what it finds to `found` in discovery order and returns the
    /// number of legs examined. Discovery order is that of a recursive
    /// search: each departure's whole subtree is finished before the next
    /// departure from the same station is looked at.
    fn find_connecting<'r>(
        &'r self,
        request: &'r SearchRequest,
        found: &mut Vec<Itinerary>,
    ) -> Result<usize, SearchError> {
        let mut expansions = 0;
        let mut stack = vec![Step::Extend(Frame {
            station: &request.source,
            visited: HashSet::from([&request.source]),
            path: Vec::new(),
            transfers: 0,
        })];

        while let Some(step) = stack.pop() {
            let frame = match step {
                Step::Emit(itinerary) => {
                    let overnight = itinerary.legs().iter().filter(|l| l.is_overnight()).count();
                    trace!(
                        transfers = itinerary.transfer_count(),
                        duration_mins = itinerary.total_duration_mins(),
                        overnight,
                        "Found connecting route"
                    );
                    found.push(itinerary);
                    continue;
                }
                Step::Extend(frame) => frame,
            };

            let mut next = Vec::new();

            for &leg in self.departures_from(frame.station) {
                expansions += 1;
                if expansions > self.config.max_expansions {
                    debug!(
                        limit = self.config.max_expansions,
                        found = found.len(),
                        "Route search budget exhausted"
                    );
                    return Err(SearchError::BudgetExhausted {
                        limit: self.config.max_expansions,
                    });
                }

                if leg.destination == request.destination {
                    // Single legs come from the direct pass
                    if frame.path.is_empty() {
                        continue;
                    }
                    let legs: Vec<Arc<Leg>> = frame
                        .path
                        .iter()
                        .copied()
                        .chain(iter::once(leg))
                        .cloned()
                        .collect();
                    next.push(Step::Emit(Itinerary::new(legs)?));
                    continue;
                }

                if frame.transfers >= request.max_transfers {
                    continue;
                }
                // Never depart the same station twice
                if frame.visited.contains(&leg.destination) {
                    continue;
                }

                let mut visited = frame.visited.clone();
                visited.insert(&leg.destination);
                let mut path = frame.path.clone();
                path.push(leg);

                next.push(Step::Extend(Frame {
                    station: &leg.destination,
                    visited,
                    path,
                    transfers: frame.transfers + 1,
                }));
            }

            // Pushed in reverse so the first departure is handled first
            stack.extend(next.into_iter().rev());
        }

        Ok(expansions)
    }
}

/// Find all routes from `source` to `destination` with the default budget.
///
/// Results are sorted by total duration, shortest first.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationId;
/// use route_server::planner::find_routes;
/// use route_server::timetable::Timetable;
///
/// let timetable = Timetable::sample().unwrap();
/// let delhi = StationId::parse("Delhi").unwrap();
/// let mumbai = StationId::parse("Mumbai").unwrap();
///
/// let routes = find_routes(timetable.legs(), &delhi, &mumbai, 0).unwrap();
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].legs()[0].id, "DEL-MUM-01");
/// ```
pub fn find_routes(
    legs: &[Arc<Leg>],
    source: &StationId,
    destination: &StationId,
    max_transfers: usize,
) -> Result<Vec<Itinerary>, SearchError> {
    let config = SearchConfig::default();
    let request = SearchRequest::new(source.clone(), destination.clone(), max_transfers);
    Ok(Planner::new(legs, &config).search(&request)?.itineraries)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
