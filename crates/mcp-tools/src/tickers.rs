//! Ticker symbol to CoinGecko id mapping.

/// Known tickers and the CoinGecko ids they stand for.
const TICKERS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("BNB", "binancecoin"),
    ("ADA", "cardano"),
    ("XRP", "ripple"),
    ("SOL", "solana"),
    ("DOGE", "dogecoin"),
    ("TRX", "tron"),
];

/// Look up the canonical id for a ticker, ignoring case.
pub fn lookup(ticker: &str) -> Option<&'static str> {
    TICKERS
        .iter()
        .find(|(symbol, _)| symbol.eq_ignore_ascii_case(ticker))
        .map(|(_, id)| *id)
}

/// Resolve user input to a canonical id.
///
/// Known tickers map through the table; anything else is treated as an id
/// already and only trimmed and lowercased.
pub fn canonical_id(input: &str) -> String {
    let trimmed = input.trim();
    match lookup(trimmed) {
        Some(id) => id.to_string(),
        None => trimmed.to_lowercase(),
    }
}
