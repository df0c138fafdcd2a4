use axum::{routing::get, Router};
use crate::state::AppState;
use crate::handlers::dashboard::dashboard;

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
