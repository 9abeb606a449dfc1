use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_server::nearby::{NearbyStations, sample_nearby_stations};
use route_server::planner::SearchConfig;
use route_server::timetable::Timetable;
use route_server::web::{AppState, create_router};

/// Address to listen on when `ROUTE_SERVER_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load the timetable (built-in sample unless a file is given)
    let timetable = match std::env::var("TIMETABLE_PATH") {
        Ok(path) => {
            info!(%path, "Loading timetable");
            Timetable::from_path(&path).expect("Failed to load timetable")
        }
        Err(_) => {
            warn!("TIMETABLE_PATH not set, using the built-in sample timetable");
            Timetable::sample().expect("Built-in timetable is invalid")
        }
    };
    info!(
        legs = timetable.len(),
        stations = timetable.stations().len(),
        "Timetable loaded"
    );

    // Load nearby stations
    let nearby = match std::env::var("NEARBY_STATIONS_PATH") {
        Ok(path) => {
            info!(%path, "Loading nearby stations");
            NearbyStations::from_path(&path).expect("Failed to load nearby stations")
        }
        Err(_) => sample_nearby_stations(),
    };
    info!(stations = nearby.len(), "Nearby stations loaded");

    // Create search config
    let search_config = SearchConfig::default();

    // Build app state and router
    let state = AppState::new(timetable, nearby, search_config);
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("ROUTE_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("ROUTE_SERVER_ADDR must be a socket address");

    info!(%addr, "Route server listening");
    info!("  GET /health      - Health check");
    info!("  GET /all_trains  - Every train in the timetable");
    info!("  GET /stations    - Every station");
    info!("  GET /trains      - Trains and routes from a station");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
