//! Application state for the web layer.

use std::sync::Arc;

use crate::nearby::NearbyStations;
use crate::planner::SearchConfig;
use crate::timetable::Timetable;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Legs available for search
    pub timetable: Timetable,

    /// Nearby stations to fall back to
    pub nearby: Arc<NearbyStations>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable, nearby: NearbyStations, config: SearchConfig) -> Self {
        Self {
            timetable,
            nearby: Arc::new(nearby),
            config: Arc::new(config),
        }
    }
}
