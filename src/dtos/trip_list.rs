use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DataSource;
use crate::models::compliance::ComplianceView;
use crate::models::trip::Trip;

#[derive(Deserialize)]
pub struct TripListQuery {
    pub date: Option<NaiveDate>,
    pub page: Option<usize>,
}

#[derive(Serialize)]
pub struct TripListItem {
    #[serde(flatten)]
    pub trip: Trip,
    pub compliance: ComplianceView,
    pub detail_url: String,
}

#[derive(Serialize)]
pub struct TripListResponse {
    pub trips: Vec<TripListItem>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub filter_date: Option<NaiveDate>,
    pub source: DataSource,
    // Set when the page is empty
    pub message: Option<&'static str>,
}
