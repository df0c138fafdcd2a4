use axum::{extract::State, Json};
use chrono::Utc;

use super::load_trips;
use crate::demo;
use crate::dtos::dashboard::{DashboardResponse, RecentTrip, Sourced};
use crate::dtos::DataSource;
use crate::listing::{most_recent, RECENT_TRIPS};
use crate::models::stats::{top_destinations, TripStats};
use crate::models::trip::Trip;
use crate::state::AppState;

const TOP_DESTINATIONS: usize = 5;

pub async fn dashboard(
    State(AppState { trips, cache, demo_mode, .. }): State<AppState>,
) -> Json<DashboardResponse> {
    let ((all, trips_source), summary, destinations) = tokio::join!(
        load_trips(&trips, &cache),
        trips.stats_summary(),
        trips.top_destinations(),
    );

    // Figures worked out locally are labelled by where their trips came from.
    let derived = match trips_source {
        DataSource::Live => DataSource::Computed,
        other => other,
    };
    let have_trips = !all.is_empty();

    let stats = match summary {
        Ok(data) => Sourced { source: DataSource::Live, data },
        Err(e) => {
            tracing::debug!(error = %e, "Stats summary unavailable");
            if have_trips {
                Sourced { source: derived, data: TripStats::from_trips(&all) }
            } else if demo_mode {
                Sourced { source: DataSource::Demo, data: demo::stats() }
            } else {
                Sourced { source: DataSource::Empty, data: TripStats::default() }
            }
        }
    };

    let performance = Sourced { source: stats.source, data: stats.data.performance() };

    let destinations = match destinations {
        Ok(data) => Sourced { source: DataSource::Live, data },
        Err(e) => {
            tracing::debug!(error = %e, "Top destinations unavailable");
            if have_trips {
                Sourced { source: derived, data: top_destinations(&all, TOP_DESTINATIONS) }
            } else if demo_mode {
                Sourced { source: DataSource::Demo, data: demo::top_destinations() }
            } else {
                Sourced { source: DataSource::Empty, data: Vec::new() }
            }
        }
    };

    let recent_trips = if have_trips {
        Sourced { source: trips_source, data: recent(all) }
    } else if demo_mode {
        tracing::info!("No trip data anywhere, serving demo trips");
        Sourced { source: DataSource::Demo, data: recent(demo::trips()) }
    } else {
        Sourced { source: DataSource::Empty, data: Vec::new() }
    };

    Json(DashboardResponse {
        stats,
        performance,
        recent_trips,
        top_destinations: destinations,
        generated_at: Utc::now(),
        new_trip_url: "/",
        all_trips_url: "/log-sheets",
    })
}

fn recent(trips: Vec<Trip>) -> Vec<RecentTrip> {
    most_recent(trips, RECENT_TRIPS)
        .into_iter()
        .map(RecentTrip::from)
        .collect()
}
