//! Coinbase spot price (resource-path response)
//!
//! `GET /v2/prices/BTC-USD/spot`
//! → `{"data":{"amount":"67001.02","base":"BTC","currency":"USD"}}`

use serde::Deserialize;

use crate::adapters::errors::{FetchError, FetchResult};
use crate::adapters::types::{decode_body, PriceField};

pub const DEFAULT_SYMBOL: &str = "BTC-USD";
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com";

#[derive(Debug, Deserialize)]
struct SpotResponse {
    data: Option<SpotPrice>,
}

#[derive(Debug, Deserialize)]
struct SpotPrice {
    amount: Option<PriceField>,
}

pub(crate) fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    symbol: &str,
) -> reqwest::RequestBuilder {
    client.get(format!(
        "{}/v2/prices/{}/spot",
        base_url.trim_end_matches('/'),
        symbol
    ))
}

/// Nested `data.amount` field
pub(crate) fn extract_price(body: &str) -> FetchResult<f64> {
    let response: SpotResponse = decode_body(body)?;
    response
        .data
        .ok_or(FetchError::MissingField("data"))?
        .amount
        .ok_or(FetchError::MissingField("data.amount"))?
        .to_price()
}
