//! Route planner using depth-first search.
//!
//! This module implements the core route-finding algorithm that answers:
//! "Which chains of trains get me from here to there, and how long does
//! each take?"
//!
//! The search enumerates every simple path up to a change limit, computes
//! travel and waiting time for each, and ranks them by total duration.

mod config;
mod fallback;
mod rank;
mod search;

pub use config::SearchConfig;
pub use fallback::{FallbackOutcome, search_with_fallback};
pub use rank::{RouteGroups, rank_itineraries};
pub use search::{Planner, SearchError, SearchRequest, SearchResult, find_routes};
