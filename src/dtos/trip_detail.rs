use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::compliance::ComplianceView;
use crate::models::trip::Trip;

/// Band by cycle hours already used: under 2, under 5, or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Serialize)]
pub struct TripDetailResponse {
    pub trip: Trip,
    pub compliance: ComplianceView,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub urgency: Urgency,
    pub map_url: String,
    pub back_url: &'static str,
}

#[derive(Serialize)]
pub struct TripDetailError {
    pub error: String,
    pub retry_url: String,
    pub back_url: &'static str,
}

#[derive(Serialize)]
pub struct MapHandoff {
    pub trip_id: i64,
    pub next: &'static str,
}
