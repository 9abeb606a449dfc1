//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Datelike;
use tracing::{error, info, warn};

use crate::domain::StationId;
use crate::planner::{Planner, SearchError, SearchRequest, search_with_fallback};
use crate::timetable::LegRecord;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/all_trains", get(all_trains))
        .route("/stations", get(stations))
        .route("/trains", get(trains))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every leg in the timetable.
async fn all_trains(State(state): State<AppState>) -> Json<Vec<LegRecord>> {
    Json(
        state
            .timetable
            .legs()
            .iter()
            .map(|leg| LegRecord::from(&**leg))
            .collect(),
    )
}

/// Every station named by a leg, sorted.
async fn stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .timetable
        .stations()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    Json(StationsResponse { stations })
}

/// Parse a station name from a query parameter.
fn parse_station(field: &str, value: &str) -> Result<StationId, AppError> {
    StationId::parse(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field} station: {value:?}"),
    })
}

/// Look up trains and routes from a station.
///
/// - With a destination and `alternative_routes=true`: multi-leg route search,
///   falling back to nearby stations when the origin has no routes.
/// - With a destination only: legs running straight there.
/// - With no destination: every departure, grouped by destination.
async fn trains(
    State(state): State<AppState>,
    query: Result<Query<TrainsRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = query?;
    let source = match req.source.as_deref() {
        Some(value) => parse_station("source", value)?,
        None => {
            return Err(AppError::BadRequest {
                message: "Source station is required".to_string(),
            });
        }
    };

    let destination = req
        .destination
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| parse_station("destination", d))
        .transpose()?;

    // Restrict to trains running on the travel date
    let timetable = match req.travel_date {
        Some(date) => state.timetable.available_on(date.weekday()),
        None => state.timetable.clone(),
    };

    let Some(destination) = destination else {
        let grouped: BTreeMap<String, Vec<LegRecord>> = timetable
            .departures_by_destination(&source)
            .into_iter()
            .map(|(dest, legs)| {
                let records = legs.iter().map(|leg| LegRecord::from(&**leg)).collect();
                (dest.to_string(), records)
            })
            .collect();
        return Ok(Json(grouped).into_response());
    };

    if !req.wants_alternatives() {
        let records: Vec<LegRecord> = timetable
            .direct(&source, &destination)
            .iter()
            .map(|leg| LegRecord::from(&**leg))
            .collect();
        return Ok(Json(records).into_response());
    }

    let max_transfers = req.max_transfers.unwrap_or(state.config.max_transfers);
    let planner = Planner::new(timetable.legs(), &state.config);
    let request = SearchRequest::new(source, destination, max_transfers);
    let outcome = search_with_fallback(&planner, &request, &state.nearby)?;

    info!(
        source = %request.source,
        destination = %request.destination,
        max_transfers,
        routes = outcome.result.itineraries.len(),
        nearby = outcome.used_fallback(),
        "Route search served"
    );

    Ok(Json(RoutesResponse::from_outcome(outcome)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "Rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
