//! Shared building blocks for ticker adapters
//!
//! HTTP client construction and the numeric field decoding that every
//! provider's extraction rule relies on.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::adapters::errors::{FetchError, FetchResult};

// =============================================================================
// HTTP Client Constants
// =============================================================================

/// HTTP connection timeout (milliseconds), fail fast if host unreachable
const HTTP_CONNECT_TIMEOUT_MS: u64 = 1500;
/// Max idle connections per host in connection pool
const HTTP_POOL_MAX_IDLE: usize = 2;
/// How long idle connections stay in the pool (seconds)
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 60;
/// TCP keepalive interval (seconds)
const HTTP_TCP_KEEPALIVE_SECS: u64 = 30;

/// Create the HTTP client shared by all ticker fetchers
///
/// `timeout` bounds each request end to end (connect + headers + body).
/// The connect timeout never exceeds it.
pub fn create_http_client(timeout: Duration) -> reqwest::Client {
    let connect_timeout = timeout.min(Duration::from_millis(HTTP_CONNECT_TIMEOUT_MS));
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE)
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .tcp_keepalive(Duration::from_secs(HTTP_TCP_KEEPALIVE_SECS))
        .tcp_nodelay(true)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());
    tracing::debug!(
        phase = "init",
        timeout_ms = timeout.as_millis() as u64,
        connect_timeout_ms = connect_timeout.as_millis() as u64,
        pool_max_idle = HTTP_POOL_MAX_IDLE,
        "HTTP client configured"
    );
    client
}

// =============================================================================
// Price field decoding
// =============================================================================

/// A numeric ticker field.
///
/// Exchanges send prices as JSON strings ("67012.50") to avoid float
/// precision loss; some mirrors and test fixtures send plain numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum PriceField {
    Text(String),
    Number(f64),
}

impl PriceField {
    /// Convert to a usable price: finite and strictly positive.
    pub(crate) fn to_price(&self) -> FetchResult<f64> {
        let value = match self {
            PriceField::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| FetchError::InvalidPrice(raw.clone()))?,
            PriceField::Number(n) => *n,
        };
        validate_price(value)
    }
}

/// Reject NaN, infinities, zero and negative prices.
pub(crate) fn validate_price(value: f64) -> FetchResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FetchError::InvalidPrice(value.to_string()))
    }
}

/// Decode a response body into a provider's typed ticker shape.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))
}
