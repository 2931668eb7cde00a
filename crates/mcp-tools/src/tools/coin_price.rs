//! Cryptocurrency spot price tool using CoinGecko API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::tickers;
use crate::tool::{ParameterKind, Tool, ToolArgs, ToolOutput, ToolParameter};
use crate::upstream::Upstream;

const DEFAULT_COIN: &str = "BTC";
const DEFAULT_CURRENCY: &str = "usd";

const PARAMETERS: &[ToolParameter] = &[
    ToolParameter::optional(
        "coin",
        ParameterKind::String,
        "Coin id or ticker (e.g., 'bitcoin' or 'BTC')",
    ),
    ToolParameter::optional(
        "vsCurrency",
        ParameterKind::String,
        "Fiat currency (e.g., 'usd', 'eur')",
    ),
];

/// A normalised price request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    /// Coin as the caller wrote it (after defaulting).
    pub coin: String,
    /// Currency as the caller wrote it (after defaulting).
    pub vs_currency: String,
    /// CoinGecko id.
    pub id: String,
    /// Lowercased currency code.
    pub currency: String,
    /// Label used in the rendered price line.
    pub display: String,
}

impl PriceQuery {
    /// Normalise raw input. Blank values take the `BTC` / `usd` defaults.
    pub fn new(coin: &str, vs_currency: &str) -> Self {
        let coin = if coin.trim().is_empty() { DEFAULT_COIN } else { coin };
        let vs_currency = if vs_currency.trim().is_empty() {
            DEFAULT_CURRENCY
        } else {
            vs_currency
        };

        let id = tickers::canonical_id(coin);
        let display = match tickers::lookup(coin.trim()) {
            Some(_) => coin.trim().to_uppercase(),
            None => id.clone(),
        };

        Self {
            coin: coin.to_string(),
            vs_currency: vs_currency.to_string(),
            id,
            currency: vs_currency.trim().to_lowercase(),
            display,
        }
    }

    /// Request path with escaped query parameters.
    pub fn path(&self) -> String {
        format!(
            "/api/v3/simple/price?ids={}&vs_currencies={}",
            urlencoding::encode(&self.id),
            urlencoding::encode(&self.currency)
        )
    }

    /// Render a `simple/price` response.
    ///
    /// A missing id/currency pair is not an error: the caller gets a hint
    /// about valid ids instead.
    pub fn render(&self, document: &Value) -> Result<String, ToolError> {
        let Some(price) = document.get(&self.id).and_then(|c| c.get(&self.currency)) else {
            return Ok(format!(
                "No price available for '{}' in '{}'. Try a CoinGecko id like 'bitcoin' or a ticker like 'BTC'.",
                self.coin, self.vs_currency
            ));
        };

        let price = price.as_f64().ok_or_else(|| ToolError::UnexpectedType {
            field: format!("{}.{}", self.id, self.currency),
            expected: "a number",
        })?;

        Ok(format!(
            "{} price: {} {}",
            self.display,
            price,
            self.currency.to_uppercase()
        ))
    }
}

/// Spot price tool.
///
/// Free tier, no API key required.
///
/// # Parameters
///
/// - `coin` (optional, default: "BTC"): ticker or CoinGecko id.
/// - `vsCurrency` (optional, default: "usd"): fiat currency code.
///
/// # Examples
///
/// ```json
/// {"coin": "ETH", "vsCurrency": "eur"}
/// {"coin": "avalanche-2"}
/// {}
/// ```
pub struct CoinPrice {
    upstream: Upstream,
}

impl CoinPrice {
    /// Create the tool on top of a CoinGecko upstream client.
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Tool for CoinPrice {
    fn name(&self) -> &str {
        "get_coin_price"
    }

    fn description(&self) -> &str {
        "Get the current spot price of a cryptocurrency from CoinGecko."
    }

    fn parameters(&self) -> &[ToolParameter] {
        PARAMETERS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let coin = args.get_string_or("coin", DEFAULT_COIN)?;
        let vs_currency = args.get_string_or("vsCurrency", DEFAULT_CURRENCY)?;
        let query = PriceQuery::new(&coin, &vs_currency);

        debug!("Getting {} price in {}", query.id, query.currency);

        let document = self.upstream.fetch_json(&query.path()).await?;
        Ok(ToolOutput::success(query.render(&document)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let query = PriceQuery::new("BTC", "");
        assert_eq!(query.id, "bitcoin");
        assert_eq!(query.currency, "usd");

        let query = PriceQuery::new("  ", " ");
        assert_eq!(query.coin, "BTC");
        assert_eq!(query.id, "bitcoin");
        assert_eq!(query.currency, "usd");
    }

    #[test]
    fn test_ticker_case_insensitive() {
        for coin in ["btc", "BTC", "Btc"] {
            let query = PriceQuery::new(coin, "usd");
            assert_eq!(query.id, "bitcoin");
            assert_eq!(query.display, "BTC");
        }
    }

    #[test]
    fn test_unknown_coin_used_as_id() {
        let query = PriceQuery::new(" Avalanche-2 ", " EUR ");
        assert_eq!(query.id, "avalanche-2");
        assert_eq!(query.display, "avalanche-2");
        assert_eq!(query.currency, "eur");
    }

    #[test]
    fn test_path_escapes_parameters() {
        let query = PriceQuery::new("ETH", "usd");
        assert_eq!(
            query.path(),
            "/api/v3/simple/price?ids=ethereum&vs_currencies=usd"
        );

        let query = PriceQuery::new("wrapped bitcoin&x=1", "usd");
        assert_eq!(
            query.path(),
            "/api/v3/simple/price?ids=wrapped%20bitcoin%26x%3D1&vs_currencies=usd"
        );
    }

    #[test]
    fn test_render_price() {
        let query = PriceQuery::new("BTC", "usd");
        let doc = json!({"bitcoin": {"usd": 65000.5}});
        assert_eq!(query.render(&doc).unwrap(), "BTC price: 65000.5 USD");
    }

    #[test]
    fn test_render_whole_number_and_id_display() {
        let query = PriceQuery::new("ethereum", "eur");
        let doc = json!({"ethereum": {"eur": 3100}});
        assert_eq!(query.render(&doc).unwrap(), "ethereum price: 3100 EUR");
    }

    #[test]
    fn test_render_missing_pair_is_informational() {
        let query = PriceQuery::new("notacoin", "usd");
        let text = query.render(&json!({})).unwrap();
        assert_eq!(
            text,
            "No price available for 'notacoin' in 'usd'. Try a CoinGecko id like 'bitcoin' or a ticker like 'BTC'."
        );

        let query = PriceQuery::new("BTC", "xyz");
        let text = query.render(&json!({"bitcoin": {}})).unwrap();
        assert!(text.starts_with("No price available for 'BTC' in 'xyz'."));
    }

    #[test]
    fn test_render_non_numeric_price() {
        let query = PriceQuery::new("BTC", "usd");
        let doc = json!({"bitcoin": {"usd": "lots"}});
        assert!(matches!(
            query.render(&doc),
            Err(ToolError::UnexpectedType { .. })
        ));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_fetch_live_price() {
        let tool = CoinPrice::new(Upstream::new(crate::UpstreamConfig::coingecko()).unwrap());
        let mut params = std::collections::HashMap::new();
        params.insert("coin".to_string(), json!("ETH"));
        let result = tool.execute(ToolArgs::new(params)).await.unwrap();
        assert!(result.content.starts_with("ETH price: "));
    }
}
