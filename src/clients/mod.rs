pub mod geo;
pub mod trips;

use std::time::Duration;

use crate::error::AppError;

/// Shared outbound HTTP client; every call carries `timeout`.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::internal(format!("HTTP client setup failed: {e}")))
}
