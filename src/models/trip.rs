use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";

/// A trip record as served by the trips API.
///
/// Numeric metrics arrive either as JSON numbers or as numeric strings
/// (decimal columns), and may be absent; all of them decode to `None`
/// when missing or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_cycle_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_hours_worked: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance_traveled: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pickup_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub dropoff_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fuel_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub adverse_conditions: Option<bool>,
    #[serde(default)]
    pub trip_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Trip {
    /// Calendar day of `trip_date`, in UTC when the value carries a time.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.trip_date.as_deref().and_then(parse_calendar_date)
    }

    pub fn is_in_progress(&self) -> bool {
        self.status.as_deref() == Some(STATUS_IN_PROGRESS)
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }
}

/// Body of `POST /api/trips/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTrip {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: f64,
    pub trip_date: String,
}

pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    // Plain dates and naive datetimes both start with the day.
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" | "" => Some(false),
            _ => None,
        },
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0),
        _ => None,
    })
}

#[cfg(test)]
pub(crate) fn sample_trip(id: i64, trip_date: &str) -> Trip {
    Trip {
        id,
        current_location: Some("Dallas, TX".to_string()),
        pickup_location: Some("Austin, TX".to_string()),
        dropoff_location: Some("Houston, TX".to_string()),
        current_cycle_used: Some(4.0),
        total_hours_worked: Some(40.0),
        distance_traveled: Some(350.0),
        pickup_time: Some(1.5),
        dropoff_time: Some(1.0),
        fuel_used: Some(55.0),
        adverse_conditions: Some(false),
        trip_date: Some(trip_date.to_string()),
        status: Some(STATUS_COMPLETED.to_string()),
    }
}
