use axum::{routing::get, Router};
use crate::state::AppState;
use crate::handlers::route_map::{route_map, route_map_by_id};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/route-map", get(route_map))
        .route("/route-map/{id}", get(route_map_by_id))
}
