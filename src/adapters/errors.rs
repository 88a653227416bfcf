//! Quote fetch error types
//!
//! Every way a ticker request can go wrong is captured in `FetchError`.
//! These errors never leave the adapter layer: `QuoteFetcher::fetch_quote`
//! logs them and collapses them into an absent quote.

use thiserror::Error;

/// Failure kinds for a single ticker request
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, DNS failure, TLS error, body read error
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Provider answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Body is not valid JSON or does not match the ticker shape
    #[error("Malformed response: {0}")]
    MalformedBody(String),

    /// Body parsed but the price field is absent or null
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Price field present but not a finite positive number
    #[error("Invalid price value: {0}")]
    InvalidPrice(String),
}

impl FetchError {
    /// True when the provider itself is unreachable or unhealthy.
    ///
    /// False for shape problems, which usually mean the provider changed its
    /// response format or the extraction rule is wrong.
    pub fn is_provider_issue(&self) -> bool {
        matches!(
            self,
            FetchError::Network(_) | FetchError::Timeout(_) | FetchError::HttpStatus(_)
        )
    }

    /// Short, stable label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout(_) => "timeout",
            FetchError::HttpStatus(_) => "http_status",
            FetchError::MalformedBody(_) => "malformed_body",
            FetchError::MissingField(_) => "missing_field",
            FetchError::InvalidPrice(_) => "invalid_price",
        }
    }
}

/// Result type alias for quote fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;
