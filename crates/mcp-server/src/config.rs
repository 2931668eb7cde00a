//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use mcp_tools::{UpstreamConfig, COINGECKO_BASE_URL, DEFAULT_USER_AGENT, WEATHER_BASE_URL};

/// MCP server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// National Weather Service API base URL.
    pub weather_base_url: String,
    /// CoinGecko API base URL.
    pub coingecko_base_url: String,
    /// User agent sent to both upstreams.
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `MCP_ADDR` | Server bind address | `0.0.0.0:5000` |
    /// | `WEATHER_API_BASE` | Weather upstream base URL | `https://api.weather.gov` |
    /// | `COINGECKO_API_BASE` | Price upstream base URL | `https://api.coingecko.com` |
    /// | `TOOL_USER_AGENT` | Outbound `User-Agent` | `weather-tool/1.0` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let addr_raw = var("MCP_ADDR", "0.0.0.0:5000");
        let addr = addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr_raw))?;

        let weather_base_url = var("WEATHER_API_BASE", WEATHER_BASE_URL);
        let coingecko_base_url = var("COINGECKO_API_BASE", COINGECKO_BASE_URL);
        for url in [&weather_base_url, &coingecko_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(Self {
            addr,
            weather_base_url,
            coingecko_base_url,
            user_agent: var("TOOL_USER_AGENT", DEFAULT_USER_AGENT),
        })
    }

    /// Upstream settings for api.weather.gov.
    pub fn weather_upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.weather_base_url, "application/geo+json")
            .with_user_agent(&self.user_agent)
    }

    /// Upstream settings for CoinGecko.
    pub fn coingecko_upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.coingecko_base_url, "application/json")
            .with_user_agent(&self.user_agent)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid MCP_ADDR format: {0}")]
    InvalidAddr(String),

    #[error("Upstream base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
}
