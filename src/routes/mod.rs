pub mod dashboard;
pub mod intake;
pub mod log_sheets;
pub mod route_map;
pub mod trip_details;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::trip_form::trip_form;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(intake::routes())
        .merge(dashboard::routes())
        .merge(route_map::routes())
        .merge(log_sheets::routes())
        .merge(trip_details::routes())
        // Unknown paths land on the intake form
        .fallback(trip_form)
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        app_state, dead_url, spawn_geocoder, spawn_router, spawn_trips_api, trip_json,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    async fn call(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn offline_state(demo_mode: bool) -> AppState {
        app_state(&dead_url(), &format!("{}/search", dead_url()), &dead_url(), demo_mode)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let resp = app(offline_state(false).await).oneshot(get("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_paths_show_the_intake_form() {
        let (status, body) = call(app(offline_state(false).await), get("/no/such/page")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Plan Your Journey");
        assert_eq!(body["fields"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn submitting_a_trip_caches_it_for_the_map() {
        let api = spawn_trips_api(vec![]).await;
        let geocoder = spawn_geocoder(&[("A", 10.0, 20.0), ("C", 11.0, 21.0)]).await;
        let router = spawn_router(Arc::new(Mutex::new(Vec::new()))).await;
        let state = app_state(&api, &geocoder, &router, false);

        let (status, body) = call(
            app(state.clone()),
            post_json(
                "/",
                json!({
                    "current_location": "A",
                    "pickup_location": "B",
                    "dropoff_location": "C",
                    "current_cycle_used": 5
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["trip"]["id"], 101);
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        assert_eq!(body["trip"]["trip_date"], today.as_str());
        assert_eq!(body["next"], "/route-map");
        assert_eq!(state.cache.recent_trip().await.map(|t| t.id), Some(101));

        // The map picks the cached trip up without a lookup; "B" does not geocode.
        let (status, map) = call(app(state), get("/route-map")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(map["trip"]["id"], 101);
        let kinds: Vec<&str> = map["markers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["current", "dropoff"]);
        assert!(map["routes"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_submission_is_rejected() {
        let (status, body) = call(
            app(offline_state(false).await),
            post_json("/", json!({"current_location": "A", "pickup_location": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Dropoff location is required");
    }

    #[tokio::test]
    async fn map_by_id_skips_unresolved_pickup() {
        let api = spawn_trips_api(vec![trip_json(7, "2025-03-15")]).await;
        let geocoder =
            spawn_geocoder(&[("Dallas, TX", 32.7767, -96.797), ("Houston, TX", 29.7604, -95.3698)]).await;
        let calls = Arc::new(Mutex::new(Vec::new()));
        let router = spawn_router(calls.clone()).await;

        let (status, map) = call(
            app(app_state(&api, &geocoder, &router, false)),
            get("/route-map/7"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(map["markers"].as_array().unwrap().len(), 2);
        assert_eq!(map["markers"][1]["popup"], "Dropoff Location: Houston, TX");
        assert_eq!(map["center"]["zoom"], 12);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn map_without_any_trip_is_not_found() {
        let api = spawn_trips_api(vec![]).await;
        let state = app_state(&api, &format!("{}/search", dead_url()), &dead_url(), false);
        let (status, _) = call(app(state), get("/route-map")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn log_sheets_paginate_and_filter() {
        let mut trips: Vec<Value> = (1..=12).map(|id| trip_json(id, "2025-03-15")).collect();
        trips.push(trip_json(13, "2025-03-16T09:30:00"));
        let api = spawn_trips_api(trips).await;
        let state = app_state(&api, &dead_url(), &dead_url(), false);

        let (_, page3) = call(app(state.clone()), get("/log-sheets?page=3")).await;
        assert_eq!(page3["total_pages"], 3);
        assert_eq!(page3["trips"].as_array().unwrap().len(), 1);
        assert_eq!(page3["trips"][0]["id"], 13);
        assert_eq!(page3["source"], "live");

        let (_, page1) = call(app(state.clone()), get("/log-sheets")).await;
        let first = &page1["trips"][0];
        assert_eq!(first["compliance"]["hours_worked_valid"], true);
        assert_eq!(first["detail_url"], "/trip-details/1");

        let (_, day) = call(app(state.clone()), get("/log-sheets?date=2025-03-16")).await;
        assert_eq!(day["total_items"], 1);
        assert_eq!(day["trips"][0]["id"], 13);

        let (_, none) = call(app(state), get("/log-sheets?date=2024-01-01")).await;
        assert_eq!(none["total_items"], 0);
        assert_eq!(none["message"], "No trips match the selected date.");
    }

    #[tokio::test]
    async fn log_sheets_fall_back_to_cache() {
        let state = offline_state(false).await;
        let (_, empty) = call(app(state.clone()), get("/log-sheets")).await;
        assert_eq!(empty["source"], "empty");

        state
            .cache
            .store_trips(&[crate::models::trip::sample_trip(4, "2025-03-15")])
            .await
            .unwrap();
        let (_, cached) = call(app(state), get("/log-sheets")).await;
        assert_eq!(cached["source"], "cache");
        assert_eq!(cached["trips"][0]["id"], 4);
    }

    #[tokio::test]
    async fn trip_detail_and_its_error_view() {
        let api = spawn_trips_api(vec![trip_json(3, "2025-03-15")]).await;
        let state = app_state(&api, &dead_url(), &dead_url(), false);

        let (status, detail) = call(app(state.clone()), get("/trip-details/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["trip"]["id"], 3);
        assert_eq!(detail["urgency"], "medium");
        assert_eq!(detail["map_url"], "/route-map/3");

        let (status, missing) = call(app(state), get("/trip-details/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(missing["retry_url"], "/trip-details/99");
        assert_eq!(missing["back_url"], "/log-sheets");
    }

    #[tokio::test]
    async fn trip_detail_tolerates_absurd_cycle_hours() {
        let mut huge = trip_json(1, "2025-03-15");
        huge["current_cycle_used"] = json!("1e13");
        let mut negative = trip_json(2, "2025-03-15");
        negative["current_cycle_used"] = json!(-1e13);
        let api = spawn_trips_api(vec![huge, negative]).await;
        let state = app_state(&api, &dead_url(), &dead_url(), false);

        let (status, body) = call(app(state.clone()), get("/trip-details/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["estimated_arrival"].is_null());
        assert_eq!(body["urgency"], "high");

        let (status, body) = call(app(state), get("/trip-details/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["estimated_arrival"].is_null());
        assert_eq!(body["urgency"], "low");
    }

    #[tokio::test]
    async fn trip_detail_error_view_when_api_is_down() {
        let (status, body) = call(app(offline_state(false).await), get("/trip-details/7")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["retry_url"], "/trip-details/7");
        assert_eq!(body["back_url"], "/log-sheets");
        assert!(body["error"].as_str().unwrap().starts_with("network error"));
    }

    #[tokio::test]
    async fn view_in_map_for_missing_trip_leaves_cache_alone() {
        let api = spawn_trips_api(vec![trip_json(3, "2025-03-15")]).await;
        let state = app_state(&api, &dead_url(), &dead_url(), false);

        let (status, body) = call(
            app(state.clone()),
            Request::builder()
                .method("POST")
                .uri("/trip-details/99/view-in-map")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Trip 99 not found");
        assert!(state.cache.recent_trip().await.is_none());
    }

    #[tokio::test]
    async fn view_in_map_hands_the_trip_over() {
        let api = spawn_trips_api(vec![trip_json(3, "2025-03-15")]).await;
        let state = app_state(&api, &dead_url(), &dead_url(), false);

        let (status, body) = call(
            app(state.clone()),
            Request::builder()
                .method("POST")
                .uri("/trip-details/3/view-in-map")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["next"], "/route-map");
        assert_eq!(state.cache.recent_trip().await.map(|t| t.id), Some(3));
    }

    #[tokio::test]
    async fn dashboard_computes_from_live_trips() {
        let api = spawn_trips_api(
            (1..=7)
                .map(|id| trip_json(id, &format!("2025-03-{:02}", id)))
                .collect(),
        )
        .await;
        let state = app_state(&api, &dead_url(), &dead_url(), true);

        let (_, body) = call(app(state), get("/dashboard")).await;
        assert_eq!(body["recent_trips"]["source"], "live");
        let recent: Vec<i64> = body["recent_trips"]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
        assert_eq!(body["stats"]["source"], "computed");
        assert_eq!(body["stats"]["data"]["totalTrips"], 7);
        assert_eq!(body["performance"]["source"], "computed");
        assert_eq!(body["performance"]["data"]["avgTripHours"], 4.0);
        assert_eq!(body["performance"]["data"]["avgTripDistance"], 350.0);
        let mpg = body["performance"]["data"]["fuelEfficiency"].as_f64().unwrap();
        assert!((mpg - 350.0 / 55.0).abs() < 1e-9);
        assert_eq!(body["top_destinations"]["data"][0]["destination"], "Houston, TX");
    }

    #[tokio::test]
    async fn dashboard_offline_is_empty_unless_demo() {
        let (_, body) = call(app(offline_state(false).await), get("/dashboard")).await;
        assert_eq!(body["recent_trips"]["source"], "empty");
        assert_eq!(body["stats"]["source"], "empty");
        assert!(body["recent_trips"]["data"].as_array().unwrap().is_empty());
        assert_eq!(body["performance"]["source"], "empty");
        assert_eq!(body["performance"]["data"]["fuelEfficiency"], 0.0);

        let (_, demo) = call(app(offline_state(true).await), get("/dashboard")).await;
        assert_eq!(demo["recent_trips"]["source"], "demo");
        assert_eq!(demo["recent_trips"]["data"].as_array().unwrap().len(), 5);
        assert_eq!(demo["stats"]["source"], "demo");
        assert_eq!(demo["performance"]["source"], "demo");
        assert!(demo["performance"]["data"]["avgTripDistance"].as_f64().unwrap() > 0.0);
        assert_eq!(demo["top_destinations"]["source"], "demo");
    }
}
