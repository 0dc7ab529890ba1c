use axum::{routing::get, Router};

use crate::features::map::handlers::{self, MapState};

/// Create routes for the map feature
pub fn routes(state: MapState) -> Router {
    Router::new()
        .route("/api/map", get(handlers::get_map))
        .route("/api/map/tiles/{z}/{x}/{y}", get(handlers::get_tile))
        .with_state(state)
}
