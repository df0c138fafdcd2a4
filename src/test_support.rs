// In-process stand-ins for the trips API, geocoder and router.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::cache::TripCache;
use crate::clients::{geo::Geocoder, geo::RoutePlanner, trips::TripsClient};
use crate::state::AppState;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_mock(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Base URL that refuses connections.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Geocoder answering from a fixed place table; unknown names get `[]`.
pub async fn spawn_geocoder(places: &[(&str, f64, f64)]) -> String {
    let table: HashMap<String, (f64, f64)> = places
        .iter()
        .map(|(name, lat, lng)| (name.to_string(), (*lat, *lng)))
        .collect();

    let router = Router::new()
        .route(
            "/search",
            get(
                |State(table): State<Arc<HashMap<String, (f64, f64)>>>,
                 Query(params): Query<HashMap<String, String>>| async move {
                    let q = params.get("q").cloned().unwrap_or_default();
                    match table.get(&q) {
                        Some((lat, lng)) => Json(json!([
                            { "lat": lat.to_string(), "lon": lng.to_string(), "display_name": q }
                        ])),
                        None => Json(json!([])),
                    }
                },
            ),
        )
        .with_state(Arc::new(table));

    format!("{}/search", spawn_mock(router).await)
}

/// Router that draws a straight line between the requested points and
/// records each request's coordinate path.
pub async fn spawn_router(calls: Arc<Mutex<Vec<String>>>) -> String {
    let router = Router::new()
        .route(
            "/route/v1/driving/{coords}",
            get(
                |State(calls): State<Arc<Mutex<Vec<String>>>>, Path(coords): Path<String>| async move {
                    calls.lock().unwrap().push(coords.clone());
                    let points: Vec<Vec<f64>> = coords
                        .split(';')
                        .map(|pair| pair.split(',').filter_map(|v| v.parse().ok()).collect())
                        .collect();
                    Json(json!({
                        "code": "Ok",
                        "routes": [{ "geometry": { "type": "LineString", "coordinates": points } }]
                    }))
                },
            ),
        )
        .with_state(calls);

    format!("{}/route/v1/driving", spawn_mock(router).await)
}

/// Trips API holding `trips`; `POST /trips/` assigns id 101.
pub async fn spawn_trips_api(trips: Vec<Value>) -> String {
    let trips = Arc::new(trips);
    let router = Router::new()
        .route(
            "/api/trips/",
            get(|State(trips): State<Arc<Vec<Value>>>| async move { Json(trips.as_ref().clone()) }).post(
                |Json(mut body): Json<Value>| async move {
                    body["id"] = json!(101);
                    body["status"] = json!("In Progress");
                    (StatusCode::CREATED, Json(body))
                },
            ),
        )
        .route(
            "/api/trips/latest/",
            get(|State(trips): State<Arc<Vec<Value>>>| async move {
                match trips.last() {
                    Some(t) => Ok(Json(t.clone())),
                    None => Err(StatusCode::NOT_FOUND),
                }
            }),
        )
        .route(
            "/api/trips/{id}/",
            get(
                |State(trips): State<Arc<Vec<Value>>>, Path(id): Path<i64>| async move {
                    trips
                        .iter()
                        .find(|t| t["id"].as_i64() == Some(id))
                        .cloned()
                        .map(Json)
                        .ok_or(StatusCode::NOT_FOUND)
                },
            ),
        )
        .with_state(trips);

    format!("{}/api", spawn_mock(router).await)
}

pub fn app_state(trips_api: &str, geocoder: &str, router: &str, demo_mode: bool) -> AppState {
    let http = http_client();
    AppState {
        trips: TripsClient::new(http.clone(), trips_api),
        geocoder: Geocoder::new(http.clone(), geocoder),
        router: RoutePlanner::new(http, router),
        cache: TripCache::in_memory(),
        demo_mode,
    }
}

pub fn trip_json(id: i64, trip_date: &str) -> Value {
    json!({
        "id": id,
        "current_location": "Dallas, TX",
        "pickup_location": "Austin, TX",
        "dropoff_location": "Houston, TX",
        "current_cycle_used": "4.00",
        "total_hours_worked": "40.00",
        "distance_traveled": 350,
        "pickup_time": 1.5,
        "dropoff_time": 1,
        "fuel_used": 55,
        "adverse_conditions": false,
        "trip_date": trip_date,
        "status": "Completed"
    })
}
