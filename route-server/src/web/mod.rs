//! Web layer for the route server.
//!
//! Provides HTTP endpoints for listing trains and searching routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
