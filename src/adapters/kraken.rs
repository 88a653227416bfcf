//! Kraken public ticker (result-map response)
//!
//! `GET /0/public/Ticker?pair=XBTUSDT`
//! → `{"error":[],"result":{"XBTUSDT":{"a":["67005.10000","1","1.000"],...}}}`
//!
//! The result key is Kraken's canonical pair name, which does not always
//! match the requested pair, so the first entry in document order is
//! taken. `a` is the ask array `[price, whole lot volume, lot volume]`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::adapters::errors::{FetchError, FetchResult};
use crate::adapters::types::{decode_body, PriceField};

pub const DEFAULT_SYMBOL: &str = "XBTUSDT";
pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com";

const TICKER_PATH: &str = "/0/public/Ticker";

#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default)]
    error: Vec<String>,
    // serde_json's `preserve_order` keeps the keys as sent
    result: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct PairTicker {
    #[serde(default)]
    a: Vec<PriceField>,
}

pub(crate) fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    symbol: &str,
) -> reqwest::RequestBuilder {
    client
        .get(format!("{}{}", base_url.trim_end_matches('/'), TICKER_PATH))
        .query(&[("pair", symbol)])
}

/// First entry under `result`, first element of its `a` array
pub(crate) fn extract_price(body: &str) -> FetchResult<f64> {
    let response: TickerResponse = decode_body(body)?;
    if !response.error.is_empty() {
        tracing::debug!(errors = ?response.error, "Kraken reported errors");
    }

    let first = response
        .result
        .and_then(|result| result.into_iter().next())
        .map(|(_, ticker)| ticker)
        .ok_or(FetchError::MissingField("result"))?;
    let ticker: PairTicker =
        serde_json::from_value(first).map_err(|e| FetchError::MalformedBody(e.to_string()))?;

    ticker
        .a
        .first()
        .ok_or(FetchError::MissingField("result.*.a[0]"))?
        .to_price()
}
