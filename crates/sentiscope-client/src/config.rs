//! Client configuration.
//!
//! The only settings are the service origin and the request timeout. They
//! come from defaults, the environment, or a TOML/JSON file.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default service origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Environment variable overriding the service origin.
pub const BASE_URL_ENV: &str = "SENTISCOPE_API_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "SENTISCOPE_TIMEOUT_SECS";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// API client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service origin, e.g. `http://localhost:5001`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout", rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `SENTISCOPE_API_URL` and `SENTISCOPE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Set the service origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(())
    }

    /// Absolute URL for a path under the base address.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
