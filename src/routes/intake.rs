use axum::{routing::get, Router};
use crate::state::AppState;
use crate::handlers::trip_form::{submit_trip, trip_form};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(trip_form).post(submit_trip))
}
