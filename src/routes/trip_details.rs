use axum::{
    routing::{get, post},
    Router,
};
use crate::state::AppState;
use crate::handlers::trip_detail::{get_trip_detail, view_in_map};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trip-details/{id}", get(get_trip_detail))
        .route("/trip-details/{id}/view-in-map", post(view_in_map))
}
