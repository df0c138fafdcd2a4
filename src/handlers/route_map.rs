use axum::{extract::{Path, State}, Json};

use crate::clients::geo::resolve_trip;
use crate::dtos::route_map::{
    LegKind, MapCenter, MapMarker, RouteLine, RouteMapView, StopKind, TripSummary,
};
use crate::error::AppError;
use crate::models::geo::ResolvedTrip;
use crate::models::trip::Trip;
use crate::state::AppState;

const DEFAULT_CENTER: MapCenter = MapCenter { lat: 51.505, lng: -0.09, zoom: 13 };
const CURRENT_ZOOM: u8 = 12;
const NOT_SPECIFIED: &str = "Not specified";

/// Map for the most recently handed-off trip, else the API's latest.
pub async fn route_map(State(state): State<AppState>) -> Result<Json<RouteMapView>, AppError> {
    let trip = match state.cache.recent_trip().await {
        Some(trip) => trip,
        None => {
            tracing::debug!("No cached trip, asking for the latest");
            state.trips.latest_trip().await?
        }
    };
    Ok(Json(render(&state, trip).await))
}

pub async fn route_map_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RouteMapView>, AppError> {
    let trip = state.trips.get_trip(id).await?;
    Ok(Json(render(&state, trip).await))
}

async fn render(state: &AppState, trip: Trip) -> RouteMapView {
    let resolved = resolve_trip(&state.geocoder, &state.router, &trip).await;
    tracing::info!(
        id = trip.id,
        stops = [resolved.current, resolved.pickup, resolved.dropoff].iter().flatten().count(),
        legs = [&resolved.current_to_pickup, &resolved.pickup_to_dropoff].iter().filter(|l| l.is_some()).count(),
        "Route map resolved"
    );
    build_view(trip, resolved)
}

fn build_view(trip: Trip, resolved: ResolvedTrip) -> RouteMapView {
    let stops = [
        (StopKind::Current, resolved.current, &trip.current_location),
        (StopKind::Pickup, resolved.pickup, &trip.pickup_location),
        (StopKind::Dropoff, resolved.dropoff, &trip.dropoff_location),
    ];
    let markers = stops
        .into_iter()
        .filter_map(|(kind, position, text)| {
            Some(MapMarker {
                kind,
                position: position?,
                popup: format!("{}: {}", kind.label(), text.as_deref().unwrap_or_default()),
                color: kind.color(),
            })
        })
        .collect();

    let mut routes = Vec::new();
    if let Some(positions) = resolved.current_to_pickup {
        routes.push(RouteLine {
            kind: LegKind::CurrentToPickup,
            positions,
            color: "#3388ff",
            dashed: false,
        });
    }
    if let Some(positions) = resolved.pickup_to_dropoff {
        routes.push(RouteLine {
            kind: LegKind::PickupToDropoff,
            positions,
            color: "#ff3333",
            dashed: true,
        });
    }

    let center = match resolved.current {
        Some(at) => MapCenter { lat: at.lat, lng: at.lng, zoom: CURRENT_ZOOM },
        None => DEFAULT_CENTER,
    };

    let or_unspecified = |value: &Option<String>| present(value).unwrap_or(NOT_SPECIFIED).to_string();

    RouteMapView {
        title: format!(
            "Active trip from {} to {}",
            present(&trip.pickup_location).unwrap_or("pickup"),
            present(&trip.dropoff_location).unwrap_or("destination")
        ),
        summary: TripSummary {
            current_location: or_unspecified(&trip.current_location),
            pickup_location: or_unspecified(&trip.pickup_location),
            dropoff_location: or_unspecified(&trip.dropoff_location),
            estimated_hours: trip.current_cycle_used.unwrap_or(0.0),
        },
        center,
        markers,
        routes,
        back_url: "/",
        log_sheets_url: "/log-sheets",
        trip,
    }
}

// Blank text counts as missing.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
