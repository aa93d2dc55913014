use std::time::Duration;

use crate::error::{PlannerError, Result};

/// Default recipe API host.
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the recipe API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,

    /// Key injected as the `apiKey` query parameter on every request.
    pub api_key: String,

    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config, rejecting an empty API key.
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(PlannerError::InvalidInput(
                "API key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout,
        })
    }

    /// Config against the default host.
    pub fn with_key(api_key: &str) -> Result<Self> {
        Self::new(
            api_key,
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
