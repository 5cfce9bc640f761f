//! Client configuration: base URL, default headers, request timeout.
//!
//! # Design
//! A `ClientConfig` is read-only once handed to an `ApiClient`. Swapping
//! configuration means building a new client; nothing is shared or mutated
//! between calls.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::http::Headers;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "TODO_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    default_headers: Headers,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: default_headers(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `Content-Type: application/json` and `cache-control: no-cache`.
pub fn default_headers() -> Headers {
    Headers::new()
        .with("Content-Type", "application/json")
        .with("cache-control", "no-cache")
}

impl ClientConfig {
    /// Defaults with the given base URL. A trailing `/` is stripped.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::default().with_base_url(base_url)
    }

    /// Defaults overridden by `TODO_API_BASE_URL` and `TODO_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            config = config.with_base_url(&url)?;
        }
        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            config = config.with_timeout(parse_timeout(&raw)?);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim_end_matches('/');
        check_base_url(trimmed)?;
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The default headers plus one extra entry. The extra entry wins if the
    /// name is already present.
    pub fn headers_with(&self, name: &str, value: impl Into<String>) -> Headers {
        self.default_headers.clone().with(name, value)
    }
}

fn check_base_url(raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::QueryOrFragment(raw.to_string()));
    }
    Ok(())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Ok(Duration::from_secs_f64(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
