//! KuCoin level-1 orderbook (nested-object response)
//!
//! `GET /api/v1/market/orderbook/level1?symbol=BTC-USDT`
//! → `{"code":"200000","data":{"price":"67010.1","bestBid":"...",...}}`
//!
//! An unknown symbol still answers 200 with `"data": null`.

use serde::Deserialize;

use crate::adapters::errors::{FetchError, FetchResult};
use crate::adapters::types::{decode_body, PriceField};

pub const DEFAULT_SYMBOL: &str = "BTC-USDT";
pub const DEFAULT_BASE_URL: &str = "https://api.kucoin.com";

const TICKER_PATH: &str = "/api/v1/market/orderbook/level1";

#[derive(Debug, Deserialize)]
struct Level1Response {
    data: Option<Level1Data>,
}

#[derive(Debug, Deserialize)]
struct Level1Data {
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

/// Nested `data.price` field
pub(crate) fn extract_price(body: &str) -> FetchResult<f64> {
    let response: Level1Response = decode_body(body)?;
    response
        .data
        .ok_or(FetchError::MissingField("data"))?
        .price
        .ok_or(FetchError::MissingField("data.price"))?
        .to_price()
}
