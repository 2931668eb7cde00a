//! Per-upstream HTTP clients and the shared JSON fetch adapter.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;

/// Default National Weather Service API base.
pub const WEATHER_BASE_URL: &str = "https://api.weather.gov";

/// Default CoinGecko API base.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// User agent sent to every upstream.
pub const DEFAULT_USER_AGENT: &str = "weather-tool/1.0";

/// Connection settings for one upstream JSON API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base address that relative paths are appended to.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Value of the `Accept` header.
    pub accept: String,
}

impl UpstreamConfig {
    /// Create a configuration with the given base URL and accepted content type.
    pub fn new(base_url: impl Into<String>, accept: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: accept.into(),
        }
    }

    /// The National Weather Service API (`application/geo+json`).
    pub fn weather() -> Self {
        Self::new(WEATHER_BASE_URL, "application/geo+json")
    }

    /// The CoinGecko public API (`application/json`).
    pub fn coingecko() -> Self {
        Self::new(COINGECKO_BASE_URL, "application/json")
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve a relative path or absolute URL against the base address.
    pub fn resolve(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            return path_or_url.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        if path_or_url.starts_with('/') {
            format!("{}{}", base, path_or_url)
        } else {
            format!("{}/{}", base, path_or_url)
        }
    }
}

/// A configured client bound to one upstream.
///
/// Built once at startup and cloned into every tool that talks to the
/// upstream. Holds only connection configuration, never per-request state.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    config: UpstreamConfig,
}

impl Upstream {
    /// Build the HTTP client for the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, ToolError> {
        let mut headers = HeaderMap::new();
        let accept = HeaderValue::from_str(&config.accept).map_err(|e| {
            ToolError::ClientSetup(format!("invalid Accept value '{}': {}", config.accept, e))
        })?;
        headers.insert(ACCEPT, accept);

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| ToolError::ClientSetup(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// GET a path (relative to the base) or an absolute URL and parse the body as JSON.
    ///
    /// Fails on transport errors, non-success status codes and malformed JSON,
    /// each with its own [`ToolError`] variant. Nothing is retried.
    pub async fn fetch_json(&self, path_or_url: &str) -> Result<Value, ToolError> {
        let url = self.config.resolve(path_or_url);
        debug!("Fetching JSON from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// The set of upstream clients the built-in tools need.
#[derive(Debug, Clone)]
pub struct Upstreams {
    /// National Weather Service.
    pub weather: Upstream,
    /// CoinGecko.
    pub coingecko: Upstream,
}

impl Upstreams {
    /// Build clients for both upstreams.
    pub fn new(weather: UpstreamConfig, coingecko: UpstreamConfig) -> Result<Self, ToolError> {
        Ok(Self {
            weather: Upstream::new(weather)?,
            coingecko: Upstream::new(coingecko)?,
        })
    }

    /// Clients for the public production endpoints.
    pub fn public() -> Result<Self, ToolError> {
        Self::new(UpstreamConfig::weather(), UpstreamConfig::coingecko())
    }
}
