use serde::Serialize;

use super::trip::Trip;

/// 8-day duty-hour ceiling.
pub const MAX_HOURS_WORKED: f64 = 70.0;
/// Distance after which a refuel/rest stop is mandatory.
pub const MAX_DISTANCE_MILES: f64 = 1000.0;
/// Minimum handling time at pickup and at dropoff.
pub const MIN_STOP_HOURS: f64 = 1.0;

/// Four independent display-only verdicts for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub hours_worked_valid: bool,
    pub fueling_valid: bool,
    pub pickup_dropoff_valid: bool,
    pub adverse_conditions_valid: bool,
}

/// Verdicts plus the metrics that were absent and read as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceView {
    #[serde(flatten)]
    pub report: ComplianceReport,
    pub missing_metrics: Vec<&'static str>,
}

pub fn evaluate(trip: &Trip) -> ComplianceReport {
    ComplianceReport {
        hours_worked_valid: trip.total_hours_worked.unwrap_or(0.0) <= MAX_HOURS_WORKED,
        fueling_valid: trip.distance_traveled.unwrap_or(0.0) <= MAX_DISTANCE_MILES,
        pickup_dropoff_valid: trip.pickup_time.unwrap_or(0.0) >= MIN_STOP_HOURS
            && trip.dropoff_time.unwrap_or(0.0) >= MIN_STOP_HOURS,
        adverse_conditions_valid: !trip.adverse_conditions.unwrap_or(false),
    }
}

pub fn missing_metrics(trip: &Trip) -> Vec<&'static str> {
    [
        ("total_hours_worked", trip.total_hours_worked.is_none()),
        ("distance_traveled", trip.distance_traveled.is_none()),
        ("pickup_time", trip.pickup_time.is_none()),
        ("dropoff_time", trip.dropoff_time.is_none()),
        ("adverse_conditions", trip.adverse_conditions.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect()
}

pub fn review(trip: &Trip) -> ComplianceView {
    ComplianceView {
        report: evaluate(trip),
        missing_metrics: missing_metrics(trip),
    }
}
