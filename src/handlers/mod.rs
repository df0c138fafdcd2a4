pub mod dashboard;
pub mod route_map;
pub mod trip_detail;
pub mod trip_form;
pub mod trip_list;

use crate::cache::TripCache;
use crate::clients::trips::TripsClient;
use crate::dtos::DataSource;
use crate::models::trip::Trip;

/// Full trip collection, falling back to the last cached copy.
///
/// A live answer refreshes the cache. A failed cache write only logs.
pub(crate) async fn load_trips(trips: &TripsClient, cache: &TripCache) -> (Vec<Trip>, DataSource) {
    match trips.list_trips().await {
        Ok(list) => {
            if let Err(e) = cache.store_trips(&list).await {
                tracing::warn!(error = %e, "Could not cache trip list");
            }
            (list, DataSource::Live)
        }
        Err(e) => {
            let cached = cache.trips().await;
            tracing::warn!(error = %e, cached = cached.len(), "Trip list unavailable, falling back to cache");
            if cached.is_empty() {
                (cached, DataSource::Empty)
            } else {
                (cached, DataSource::Cache)
            }
        }
    }
}
