use serde::Serialize;

use crate::models::geo::LatLng;
use crate::models::trip::Trip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Current,
    Pickup,
    Dropoff,
}

impl StopKind {
    pub fn label(self) -> &'static str {
        match self {
            StopKind::Current => "Current Location",
            StopKind::Pickup => "Pickup Location",
            StopKind::Dropoff => "Dropoff Location",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StopKind::Current => "#4a90e2",
            StopKind::Pickup => "#2ecc71",
            StopKind::Dropoff => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegKind {
    CurrentToPickup,
    PickupToDropoff,
}

#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub kind: StopKind,
    pub position: LatLng,
    pub popup: String,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RouteLine {
    pub kind: LegKind,
    pub positions: Vec<LatLng>,
    pub color: &'static str,
    pub dashed: bool,
}

#[derive(Debug, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

#[derive(Debug, Serialize)]
pub struct TripSummary {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub estimated_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct RouteMapView {
    pub title: String,
    pub trip: Trip,
    pub summary: TripSummary,
    pub center: MapCenter,
    pub markers: Vec<MapMarker>,
    pub routes: Vec<RouteLine>,
    pub back_url: &'static str,
    pub log_sheets_url: &'static str,
}
