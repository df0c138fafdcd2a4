use axum::{extract::{Query, State}, Json};

use super::load_trips;
use crate::dtos::trip_list::{TripListItem, TripListQuery, TripListResponse};
use crate::listing::{filter_by_date, paginate, total_pages, TRIPS_PER_PAGE};
use crate::models::compliance::review;
use crate::state::AppState;

pub async fn list_trips(
    State(AppState { trips, cache, .. }): State<AppState>,
    Query(params): Query<TripListQuery>,
) -> Json<TripListResponse> {
    let (all, source) = load_trips(&trips, &cache).await;

    let filtered = match params.date {
        Some(day) => filter_by_date(all, day),
        None => all,
    };

    let page = params.page.unwrap_or(1).max(1);
    let items: Vec<TripListItem> = paginate(&filtered, page, TRIPS_PER_PAGE)
        .iter()
        .cloned()
        .map(|trip| TripListItem {
            compliance: review(&trip),
            detail_url: format!("/trip-details/{}", trip.id),
            trip,
        })
        .collect();

    let message = match (filtered.is_empty(), items.is_empty(), params.date.is_some()) {
        (true, _, true) => Some("No trips match the selected date."),
        (true, _, false) => Some("Create a new trip to get started."),
        (false, true, _) => Some("No trips on this page."),
        _ => None,
    };

    Json(TripListResponse {
        trips: items,
        page,
        per_page: TRIPS_PER_PAGE,
        total_items: filtered.len(),
        total_pages: total_pages(filtered.len(), TRIPS_PER_PAGE),
        filter_date: params.date,
        source,
        message,
    })
}
