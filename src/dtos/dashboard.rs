use chrono::{DateTime, Utc};
use serde::Serialize;

use super::DataSource;
use crate::models::stats::{DestinationCount, Performance, TripStats};
use crate::models::trip::Trip;

#[derive(Serialize)]
pub struct RecentTrip {
    pub id: i64,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub status: Option<String>,
    pub trip_date: Option<String>,
    pub hours: Option<f64>,
    pub map_url: String,
}

impl From<Trip> for RecentTrip {
    fn from(trip: Trip) -> Self {
        Self {
            map_url: format!("/route-map/{}", trip.id),
            id: trip.id,
            pickup_location: trip.pickup_location,
            dropoff_location: trip.dropoff_location,
            status: trip.status,
            trip_date: trip.trip_date,
            hours: trip.current_cycle_used,
        }
    }
}

#[derive(Serialize)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub stats: Sourced<TripStats>,
    /// Derived from `stats`; shares its source.
    pub performance: Sourced<Performance>,
    pub recent_trips: Sourced<Vec<RecentTrip>>,
    pub top_destinations: Sourced<Vec<DestinationCount>>,
    pub generated_at: DateTime<Utc>,
    pub new_trip_url: &'static str,
    pub all_trips_url: &'static str,
}
