use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use http::header::LOCATION;

use crate::dtos::trip_form::{CreateTripRequest, FormField, TripCreatedResponse, TripFormView};
use crate::error::AppError;
use crate::models::trip::NewTrip;
use crate::state::AppState;

pub const ROUTE_MAP_PATH: &str = "/route-map";

/// Hours in an eight-day duty cycle.
const MAX_CYCLE_HOURS: f64 = 192.0;

pub async fn trip_form() -> Json<TripFormView> {
    Json(TripFormView {
        title: "Plan Your Journey",
        fields: vec![
            FormField {
                name: "current_location",
                label: "Current Location",
                placeholder: "Where are you now?",
                input_type: "text",
                required: true,
            },
            FormField {
                name: "pickup_location",
                label: "Pickup Location",
                placeholder: "Where would you like to be picked up?",
                input_type: "text",
                required: true,
            },
            FormField {
                name: "dropoff_location",
                label: "Dropoff Location",
                placeholder: "Where's your destination?",
                input_type: "text",
                required: true,
            },
            FormField {
                name: "current_cycle_used",
                label: "Current Cycle Used (hrs)",
                placeholder: "Number of hours",
                input_type: "number",
                required: true,
            },
        ],
        submit_label: "Plan My Trip",
        submit_url: "/",
    })
}

pub async fn submit_trip(
    State(AppState { trips, cache, .. }): State<AppState>,
    Json(req): Json<CreateTripRequest>,
) -> Result<(StatusCode, [(http::HeaderName, &'static str); 1], Json<TripCreatedResponse>), AppError> {
    let draft = validate(req)?;
    tracing::info!(
        current = %draft.current_location,
        pickup = %draft.pickup_location,
        dropoff = %draft.dropoff_location,
        "Submitting trip"
    );

    let trip = trips.create_trip(&draft).await?;

    if let Err(e) = cache.store_recent_trip(&trip).await {
        tracing::warn!(id = trip.id, error = %e, "Could not cache created trip");
    }

    Ok((
        StatusCode::CREATED,
        [(LOCATION, ROUTE_MAP_PATH)],
        Json(TripCreatedResponse {
            trip,
            next: ROUTE_MAP_PATH,
        }),
    ))
}

fn validate(req: CreateTripRequest) -> Result<NewTrip, AppError> {
    let required = |value: String, label: &str| {
        let value = value.trim().to_string();
        if value.is_empty() {
            Err(AppError::validation(format!("{label} is required")))
        } else {
            Ok(value)
        }
    };

    let current_location = required(req.current_location, "Current location")?;
    let pickup_location = required(req.pickup_location, "Pickup location")?;
    let dropoff_location = required(req.dropoff_location, "Dropoff location")?;

    let current_cycle_used = req
        .current_cycle_used
        .ok_or_else(|| AppError::validation("Current cycle used must be a number of hours"))?;
    if current_cycle_used < 0.0 {
        return Err(AppError::validation("Current cycle used cannot be negative"));
    }
    if !(0.0..=MAX_CYCLE_HOURS).contains(&current_cycle_used) {
        return Err(AppError::validation(format!(
            "Current cycle used must be between 0 and {MAX_CYCLE_HOURS} hours"
        )));
    }

    Ok(NewTrip {
        current_location,
        pickup_location,
        dropoff_location,
        current_cycle_used,
        trip_date: today(),
    })
}

/// Submission date as `YYYY-MM-DD`, UTC.
fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
