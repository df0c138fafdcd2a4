use crate::cache::TripCache;
use crate::clients::{build_http_client, geo::Geocoder, geo::RoutePlanner, trips::TripsClient};
use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub trips: TripsClient,
    pub geocoder: Geocoder,
    pub router: RoutePlanner,
    pub cache: TripCache,
    pub demo_mode: bool,
}

impl AppState {
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let http = build_http_client(&config.user_agent, config.http_timeout)?;
        let cache = TripCache::open(&config.cache_dir).await?;

        Ok(Self {
            trips: TripsClient::new(http.clone(), config.trips_api_url.clone()),
            geocoder: Geocoder::new(http.clone(), config.geocoder_url.clone()),
            router: RoutePlanner::new(http, config.router_url.clone()),
            cache,
            demo_mode: config.demo_mode,
        })
    }
}
