//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of changes allowed when a request doesn't say.
    pub max_transfers: usize,

    /// Maximum number of legs the connecting search may examine.
    /// Searches that need more fail instead of returning a partial set.
    pub max_expansions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_transfers: usize, max_expansions: usize) -> Self {
        Self {
            max_transfers,
            max_expansions,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfers: 2,
            max_expansions: 100_000,
        }
    }
}
