// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::RemoteConfig;

/// Accept header sent with every remote request: JSON preferred, anything tolerated.
pub const ACCEPT_JSON: &str = "application/json;q=0.9,*/*;q=0.8";

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &RemoteConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
