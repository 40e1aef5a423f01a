//! Configuration management for the kickoff client
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API host used when `KICKOFF_API_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote API configuration
    pub api: ApiConfig,

    /// Search coordinator configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Request timeout in seconds (enforced by the transport)
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Search coordinator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Debounce window for the free-text input in milliseconds
    pub debounce_ms: u64,

    /// Fixed page size sent as `limit`
    pub page_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("kickoff/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            page_size: 12,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url =
            std::env::var("KICKOFF_API_URL").unwrap_or_else(|_| defaults.api.base_url.clone());

        let request_timeout_secs = env_parsed::<u64>("KICKOFF_REQUEST_TIMEOUT")
            .unwrap_or(defaults.api.request_timeout_secs);

        let user_agent =
            std::env::var("KICKOFF_USER_AGENT").unwrap_or_else(|_| defaults.api.user_agent.clone());

        let debounce_ms =
            env_parsed::<u64>("KICKOFF_DEBOUNCE_MS").unwrap_or(defaults.search.debounce_ms);

        let page_size =
            env_parsed::<u32>("KICKOFF_PAGE_SIZE").unwrap_or(defaults.search.page_size);

        let level =
            std::env::var("KICKOFF_LOG_LEVEL").unwrap_or_else(|_| defaults.logging.level.clone());

        let format =
            std::env::var("KICKOFF_LOG_FORMAT").unwrap_or_else(|_| defaults.logging.format.clone());

        Ok(Self {
            api: ApiConfig {
                base_url,
                request_timeout_secs,
                user_agent,
            },
            search: SearchConfig {
                debounce_ms,
                page_size,
            },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .with_context(|| format!("base_url is not a valid URL: {}", self.api.base_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base_url must use http or https, got {}", url.scheme());
        }

        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.search.page_size == 0 {
            anyhow::bail!("page_size must be greater than 0");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("log format must be 'text' or 'json'");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    /// Get the search debounce window as Duration
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}
