use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::models::stats::{DestinationCount, TripStats};
use crate::models::trip::{NewTrip, Trip};

/// Client for the external trips API.
#[derive(Clone)]
pub struct TripsClient {
    http: Client,
    base_url: String,
}

impl TripsClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        let resp = self.get_ok("trips/").await?;
        let body: Value = resp.json().await?;
        if !body.is_array() {
            return Err(AppError::decode("expected a JSON array of trips"));
        }
        Ok(serde_json::from_value(body)?)
    }

    pub async fn get_trip(&self, id: i64) -> Result<Trip, AppError> {
        let resp = self.http.get(self.url(&format!("trips/{id}/"))).send().await?;
        if !resp.status().is_success() {
            tracing::debug!(id, status = %resp.status(), "Trip lookup failed");
            return Err(AppError::not_found(format!("Trip {id} not found")));
        }
        Ok(resp.json().await?)
    }

    pub async fn latest_trip(&self) -> Result<Trip, AppError> {
        let resp = self.http.get(self.url("trips/latest/")).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::not_found("No trips recorded yet"));
        }
        Ok(resp.json().await?)
    }

    pub async fn create_trip(&self, draft: &NewTrip) -> Result<Trip, AppError> {
        let resp = self.http.post(self.url("trips/")).json(draft).send().await?;
        let status = resp.status();
        if status.is_client_error() {
            let detail = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(error = %e, "Could not read rejection body");
                    String::new()
                }
            };
            return Err(AppError::validation(format!(
                "Trips API rejected the trip ({status}): {detail}"
            )));
        }
        if !status.is_success() {
            return Err(AppError::network(format!("POST trips/ returned {status}")));
        }

        let trip: Trip = resp.json().await?;
        tracing::info!(id = trip.id, "Trip created");
        Ok(trip)
    }

    pub async fn stats_summary(&self) -> Result<TripStats, AppError> {
        self.get_json("stats/summary/").await
    }

    pub async fn top_destinations(&self) -> Result<Vec<DestinationCount>, AppError> {
        self.get_json("stats/top-destinations/").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        Ok(self.get_ok(path).await?.json().await?)
    }

    async fn get_ok(&self, path: &str) -> Result<Response, AppError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(AppError::network(format!("GET {path} returned {status}")))
        }
    }
}
