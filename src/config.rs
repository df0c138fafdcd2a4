use dotenvy::dotenv;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub trips_api_url: String,
    pub geocoder_url: String,
    pub router_url: String,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub cache_dir: PathBuf,
    pub demo_mode: bool,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenv().ok();

        let host = env::var("HOST")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let trips_api_url =
            env::var("TRIPS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());
        let geocoder_url = env::var("GEOCODER_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org/search".to_string());
        let router_url = env::var("ROUTER_URL")
            .unwrap_or_else(|_| "https://router.project-osrm.org/route/v1/driving".to_string());
        let user_agent = env::var("HTTP_USER_AGENT")
            .unwrap_or_else(|_| concat!("trip-planner/", env!("CARGO_PKG_VERSION")).to_string());
        let http_timeout_secs = timeout_secs(env::var("HTTP_TIMEOUT_SECS").ok().as_deref());

        let cache_dir = env::var("CACHE_DIR").unwrap_or_else(|_| ".cache".to_string());
        let demo_mode = env::var("DEMO_MODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            host,
            port,
            trips_api_url: trim_base(trips_api_url),
            geocoder_url,
            router_url: trim_base(router_url),
            user_agent,
            http_timeout: Duration::from_secs(http_timeout_secs),
            cache_dir: PathBuf::from(cache_dir),
            demo_mode,
            log_level,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Zero or unparsable falls back to the default.
fn timeout_secs(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
