//! Client-side list shaping: day filter, fixed-size pages, recency order.
use chrono::NaiveDate;

use crate::models::trip::Trip;

pub const TRIPS_PER_PAGE: usize = 6;
pub const RECENT_TRIPS: usize = 5;

/// Trips whose `trip_date` falls on `day`; undated trips never match.
pub fn filter_by_date(trips: Vec<Trip>, day: NaiveDate) -> Vec<Trip> {
    trips
        .into_iter()
        .filter(|trip| {
            let matches = trip.calendar_date() == Some(day);
            if !matches && trip.calendar_date().is_none() {
                tracing::debug!(id = trip.id, trip_date = ?trip.trip_date, "Skipping trip without a usable date");
            }
            matches
        })
        .collect()
}

/// 1-based page of `items`; page 0 reads as page 1.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Newest `limit` trips by `trip_date`; undated trips sort last.
pub fn most_recent(mut trips: Vec<Trip>, limit: usize) -> Vec<Trip> {
    trips.sort_by(|a, b| b.calendar_date().cmp(&a.calendar_date()));
    trips.truncate(limit);
    trips
}
