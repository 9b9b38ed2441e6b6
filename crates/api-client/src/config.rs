//! Client configuration read from the environment.

use std::time::Duration;

use patrimony_core::errors::{Error, Result};

/// Backend used when `PATRIMONY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Request timeout used when `PATRIMONY_API_TIMEOUT_MS` is not set.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ApiClientConfig {
    /// Reads `PATRIMONY_API_URL` and `PATRIMONY_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("PATRIMONY_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidConfigValue(format!(
                "PATRIMONY_API_URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        let timeout_ms = match lookup("PATRIMONY_API_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::InvalidConfigValue(format!("PATRIMONY_API_TIMEOUT_MS '{}': {}", raw, e))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}
