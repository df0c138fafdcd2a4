use serde::{Deserialize, Serialize};

use crate::models::trip::{lenient_f64, Trip};

#[derive(Deserialize)]
pub struct CreateTripRequest {
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    // Number inputs post strings
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_cycle_used: Option<f64>,
}

#[derive(Serialize)]
pub struct TripCreatedResponse {
    pub trip: Trip,
    pub next: &'static str,
}

#[derive(Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub required: bool,
}

#[derive(Serialize)]
pub struct TripFormView {
    pub title: &'static str,
    pub fields: Vec<FormField>,
    pub submit_label: &'static str,
    pub submit_url: &'static str,
}
