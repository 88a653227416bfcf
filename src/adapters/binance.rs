//! Binance spot ticker (flat-field response)
//!
//! `GET /api/v3/ticker/price?symbol=BTCUSDT`
//! → `{"symbol":"BTCUSDT","price":"67012.50000000"}`

use serde::Deserialize;

use crate::adapters::errors::{FetchError, FetchResult};
use crate::adapters::types::{decode_body, PriceField};

pub const DEFAULT_SYMBOL: &str = "BTCUSDT";
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

const TICKER_PATH: &str = "/api/v3/ticker/price";

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: Option<PriceField>,
}

pub(crate) fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    symbol: &str,
) -> reqwest::RequestBuilder {
    client
        .get(format!("{}{}", base_url.trim_end_matches('/'), TICKER_PATH))
        .query(&[("symbol", symbol)])
}

/// Top-level `price` field
pub(crate) fn extract_price(body: &str) -> FetchResult<f64> {
    let ticker: TickerPrice = decode_body(body)?;
    ticker
        .price
        .ok_or(FetchError::MissingField("price"))?
        .to_price()
}
