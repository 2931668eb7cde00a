//! Weather and crypto price tools for MCP clients.
//!
//! This crate provides a `ToolRegistry` of tools that an external agent can
//! call by name. Each tool is a thin adapter over a public JSON API: it takes
//! typed parameters, issues one or two GETs through an [`Upstream`] client,
//! extracts a few fields and renders plain text.
//!
//! # Built-in Tools
//!
//! - [`Alerts`] (`get_alerts`) - Active weather alerts for a US state via api.weather.gov.
//! - [`Forecast`] (`get_forecast`) - Next five forecast periods for a coordinate.
//! - [`CoinPrice`] (`get_coin_price`) - Cryptocurrency spot price via CoinGecko.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_tools::{default_registry, Upstreams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mcp_tools::ToolError> {
//!     let registry = default_registry(&Upstreams::public()?);
//!
//!     let result = registry
//!         .execute_json("get_coin_price", r#"{"coin": "ETH", "vsCurrency": "eur"}"#)
//!         .await?;
//!     println!("{}", result.content); // "ETH price: 3012.4 EUR"
//!     Ok(())
//! }
//! ```

mod error;
pub mod json;
mod registry;
pub mod tickers;
mod tool;
pub mod tools;
mod upstream;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{ParameterKind, Tool, ToolArgs, ToolDescriptor, ToolOutput, ToolParameter};
pub use tools::{Alerts, CoinPrice, Forecast, PriceQuery, MAX_PERIODS, NO_ALERTS};
pub use upstream::{
    Upstream, UpstreamConfig, Upstreams, COINGECKO_BASE_URL, DEFAULT_USER_AGENT, WEATHER_BASE_URL,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a new registry with all built-in tools registered.
pub fn default_registry(upstreams: &Upstreams) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Weather tools
    registry.register(Alerts::new(upstreams.weather.clone()));
    registry.register(Forecast::new(upstreams.weather.clone()));

    // Financial tools
    registry.register(CoinPrice::new(upstreams.coingecko.clone()));

    registry
}
