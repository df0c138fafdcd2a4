use serde::{Deserialize, Serialize};

use super::trip::Trip;

/// Aggregate trip statistics, keyed the way `/api/stats/summary/` sends them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStats {
    #[serde(default)]
    pub total_trips: u64,
    #[serde(default)]
    pub active_trips: u64,
    #[serde(default)]
    pub completed_trips: u64,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub fuel_used: f64,
}

impl TripStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        Self {
            total_trips: trips.len() as u64,
            active_trips: trips.iter().filter(|t| t.is_in_progress()).count() as u64,
            completed_trips: trips.iter().filter(|t| t.is_completed()).count() as u64,
            total_distance: trips.iter().filter_map(|t| t.distance_traveled).sum(),
            total_hours: trips.iter().filter_map(|t| t.current_cycle_used).sum(),
            fuel_used: trips.iter().filter_map(|t| t.fuel_used).sum(),
        }
    }

    /// Per-trip averages and fuel efficiency. A zero divisor yields 0.
    pub fn performance(&self) -> Performance {
        let per = |total: f64, count: f64| if count > 0.0 { total / count } else { 0.0 };
        let trips = self.total_trips as f64;
        Performance {
            avg_trip_hours: per(self.total_hours, trips),
            avg_trip_distance: per(self.total_distance, trips),
            fuel_efficiency: per(self.total_distance, self.fuel_used),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Hours per trip.
    pub avg_trip_hours: f64,
    /// Miles per trip.
    pub avg_trip_distance: f64,
    /// Miles per gallon.
    pub fuel_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationCount {
    pub destination: String,
    pub count: u64,
}

/// Counts dropoff locations, most frequent first, ties by name.
pub fn top_destinations(trips: &[Trip], limit: usize) -> Vec<DestinationCount> {
    let mut counts: std::collections::HashMap<&str, u64> = std::collections::HashMap::new();
    for dest in trips.iter().filter_map(|t| t.dropoff_location.as_deref()) {
        let dest = dest.trim();
        if !dest.is_empty() {
            *counts.entry(dest).or_default() += 1;
        }
    }

    let mut ranked: Vec<DestinationCount> = counts
        .into_iter()
        .map(|(destination, count)| DestinationCount {
            destination: destination.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.destination.cmp(&b.destination)));
    ranked.truncate(limit);
    ranked
}
