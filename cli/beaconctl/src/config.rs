//! CLI configuration (env-driven).

use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Feed server base URL (example: http://localhost:3000).
    pub api_url: String,

    /// Upper bound on any single fetch.
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("BEACON_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let fetch_timeout_ms: u64 = std::env::var("BEACON_FETCH_TIMEOUT_MS")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("BEACON_FETCH_TIMEOUT_MS must be an integer (milliseconds).")?
            .unwrap_or(5000);
        let fetch_timeout = Duration::from_millis(fetch_timeout_ms.max(100));

        Ok(Self {
            api_url,
            fetch_timeout,
        })
    }
}
