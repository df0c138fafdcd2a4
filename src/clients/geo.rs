use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::geo::{LatLng, ResolvedTrip};
use crate::models::trip::Trip;

/// Free-text place search against a Nominatim-compatible endpoint.
#[derive(Clone)]
pub struct Geocoder {
    http: Client,
    search_url: String,
}

#[derive(Deserialize)]
struct Place {
    lat: Value,
    lon: Value,
}

impl Geocoder {
    pub fn new(http: Client, search_url: impl Into<String>) -> Self {
        Self {
            http,
            search_url: search_url.into(),
        }
    }

    /// Top match for `location`, or `None` when nothing matched or the
    /// service could not be reached.
    pub async fn geocode(&self, location: &str) -> Option<LatLng> {
        let location = location.trim();
        if location.is_empty() {
            return None;
        }

        match self.search(location).await {
            Ok(Some(point)) => Some(point),
            Ok(None) => {
                tracing::info!(location, "No geocoding match");
                None
            }
            Err(e) => {
                tracing::warn!(location, error = %e, "Geocoding failed");
                None
            }
        }
    }

    async fn search(&self, location: &str) -> Result<Option<LatLng>, AppError> {
        let url = Url::parse_with_params(
            &self.search_url,
            &[("q", location), ("format", "json"), ("limit", "1")],
        )
        .map_err(|e| AppError::internal(format!("Bad geocoder URL: {e}")))?;

        let places: Vec<Place> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(places
            .first()
            .and_then(|p| Some(LatLng::new(coordinate(&p.lat)?, coordinate(&p.lon)?))))
    }
}

// Nominatim sends coordinates as strings.
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Driving routes from an OSRM-compatible `route/v1/driving` endpoint.
#[derive(Clone)]
pub struct RoutePlanner {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

impl RoutePlanner {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Road polyline from `start` to `end`, or `None` on any failure.
    pub async fn route(&self, start: LatLng, end: LatLng) -> Option<Vec<LatLng>> {
        match self.fetch(start, end).await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Routing failed");
                None
            }
        }
    }

    async fn fetch(&self, start: LatLng, end: LatLng) -> Result<Option<Vec<LatLng>>, AppError> {
        // The router speaks lng,lat.
        let url = format!(
            "{}/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url, start.lng, start.lat, end.lng, end.lat
        );

        // Non-2xx answers still carry a code worth reading.
        let body: RouteResponse = self.http.get(url).send().await?.json().await?;
        if body.code != "Ok" {
            tracing::info!(code = %body.code, "Router found no route");
            return Ok(None);
        }

        Ok(body.routes.into_iter().next().map(|route| {
            route
                .geometry
                .coordinates
                .into_iter()
                .map(|[lng, lat]| LatLng::new(lat, lng))
                .collect()
        }))
    }
}

/// Resolves a trip's stops, then its two legs.
///
/// The three lookups are independent and run together; both legs wait
/// for them. The pickup leg is requested before the dropoff leg.
pub async fn resolve_trip(geocoder: &Geocoder, router: &RoutePlanner, trip: &Trip) -> ResolvedTrip {
    let lookup = move |location: &Option<String>| {
        let location = location.clone();
        async move {
            match location {
                Some(text) => geocoder.geocode(&text).await,
                None => None,
            }
        }
    };

    let (current, pickup, dropoff) = tokio::join!(
        lookup(&trip.current_location),
        lookup(&trip.pickup_location),
        lookup(&trip.dropoff_location),
    );

    let current_to_pickup = match (current, pickup) {
        (Some(from), Some(to)) => router.route(from, to).await,
        _ => None,
    };
    let pickup_to_dropoff = match (pickup, dropoff) {
        (Some(from), Some(to)) => router.route(from, to).await,
        _ => None,
    };

    ResolvedTrip {
        current,
        pickup,
        dropoff,
        current_to_pickup,
        pickup_to_dropoff,
    }
}
