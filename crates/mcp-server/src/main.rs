//! MCP server exposing weather and crypto price tools.
//!
//! Serves JSON-RPC on `/mcp`, plus `/health` and `/debug/tools`.

mod config;
mod error;
mod mcp;
mod protocol;
mod routes;
mod state;

use mcp_tools::{default_registry, Upstreams};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting MCP server");

    // One client per upstream, shared by every tool that uses it
    let upstreams = Upstreams::new(config.weather_upstream(), config.coingecko_upstream())?;
    info!(
        weather = %config.weather_base_url,
        coingecko = %config.coingecko_base_url,
        "Upstream clients ready"
    );

    let registry = default_registry(&upstreams);
    info!(tools = registry.len(), "Tool registry built");

    let app = routes::router().with_state(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "MCP endpoint: http://{}/mcp", config.addr);
    info!("Press Ctrl+C to stop the server");
    axum::serve(listener, app).await?;

    Ok(())
}
