use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Duration, Utc};

use super::trip_form::ROUTE_MAP_PATH;
use crate::dtos::trip_detail::{MapHandoff, TripDetailError, TripDetailResponse, Urgency};
use crate::error::AppError;
use crate::models::compliance::review;
use crate::state::AppState;

const LOG_SHEETS_PATH: &str = "/log-sheets";

pub async fn get_trip_detail(
    State(AppState { trips, .. }): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match trips.get_trip(id).await {
        Ok(trip) => {
            let hours = trip.current_cycle_used;
            Json(TripDetailResponse {
                compliance: review(&trip),
                estimated_arrival: estimated_arrival(Utc::now(), hours),
                urgency: urgency(hours),
                map_url: format!("{ROUTE_MAP_PATH}/{id}"),
                back_url: LOG_SHEETS_PATH,
                trip,
            })
            .into_response()
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "Trip detail unavailable");
            (
                e.status(),
                Json(TripDetailError {
                    error: e.to_string(),
                    retry_url: format!("/trip-details/{id}"),
                    back_url: LOG_SHEETS_PATH,
                }),
            )
                .into_response()
        }
    }
}

/// Makes `id` the trip the route map shows next.
pub async fn view_in_map(
    State(AppState { trips, cache, .. }): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MapHandoff>, AppError> {
    let trip = trips.get_trip(id).await?;
    cache.store_recent_trip(&trip).await?;

    Ok(Json(MapHandoff {
        trip_id: trip.id,
        next: ROUTE_MAP_PATH,
    }))
}

// Whole hours only; fractions are dropped.
fn whole_hours(hours: Option<f64>) -> i64 {
    hours.unwrap_or(0.0).trunc() as i64
}

/// `None` when the offset does not fit in a timestamp.
fn estimated_arrival(now: DateTime<Utc>, hours: Option<f64>) -> Option<DateTime<Utc>> {
    Duration::try_hours(whole_hours(hours)).and_then(|offset| now.checked_add_signed(offset))
}

fn urgency(hours: Option<f64>) -> Urgency {
    match whole_hours(hours) {
        h if h < 2 => Urgency::Low,
        h if h < 5 => Urgency::Medium,
        _ => Urgency::High,
    }
}
