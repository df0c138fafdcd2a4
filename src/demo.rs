//! Placeholder dashboard data served only with `DEMO_MODE` on.
//!
//! Every record here is made up. Views that use it report
//! [`DataSource::Demo`](crate::dtos::DataSource::Demo).
use crate::models::stats::{DestinationCount, TripStats};
use crate::models::trip::{Trip, STATUS_COMPLETED, STATUS_IN_PROGRESS};

const DEMO_TRIPS: [(i64, &str, &str, &str, &str, f64); 5] = [
    (1, "Los Angeles, CA", "San Francisco, CA", STATUS_IN_PROGRESS, "2025-03-15", 5.2),
    (2, "Seattle, WA", "Portland, OR", STATUS_COMPLETED, "2025-03-14", 3.0),
    (3, "Chicago, IL", "Detroit, MI", STATUS_COMPLETED, "2025-03-13", 4.8),
    (4, "New York, NY", "Boston, MA", STATUS_COMPLETED, "2025-03-12", 3.5),
    (5, "Miami, FL", "Orlando, FL", STATUS_COMPLETED, "2025-03-11", 2.8),
];

pub fn trips() -> Vec<Trip> {
    DEMO_TRIPS
        .iter()
        .map(|&(id, pickup, dropoff, status, date, hours)| Trip {
            id,
            current_location: None,
            pickup_location: Some(pickup.to_string()),
            dropoff_location: Some(dropoff.to_string()),
            current_cycle_used: Some(hours),
            total_hours_worked: None,
            distance_traveled: None,
            pickup_time: None,
            dropoff_time: None,
            fuel_used: None,
            adverse_conditions: None,
            trip_date: Some(date.to_string()),
            status: Some(status.to_string()),
        })
        .collect()
}

pub fn stats() -> TripStats {
    TripStats {
        total_trips: 142,
        active_trips: 8,
        completed_trips: 134,
        total_distance: 12458.0,
        total_hours: 248.0,
        fuel_used: 952.0,
    }
}

pub fn top_destinations() -> Vec<DestinationCount> {
    [
        ("San Francisco, CA", 24),
        ("Seattle, WA", 18),
        ("Portland, OR", 15),
        ("Denver, CO", 12),
        ("Phoenix, AZ", 10),
    ]
    .into_iter()
    .map(|(destination, count)| DestinationCount {
        destination: destination.to_string(),
        count,
    })
    .collect()
}
