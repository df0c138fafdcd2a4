use axum::{routing::get, Router};
use crate::state::AppState;
use crate::handlers::trip_list::list_trips;

pub fn routes() -> Router<AppState> {
    Router::new().route("/log-sheets", get(list_trips))
}
