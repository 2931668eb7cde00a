//! Built-in tool implementations.

mod alerts;
mod coin_price;
mod forecast;

pub use alerts::{Alerts, NO_ALERTS};
pub use coin_price::{CoinPrice, PriceQuery};
pub use forecast::{Forecast, MAX_PERIODS};
