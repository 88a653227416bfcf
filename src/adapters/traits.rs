//! Quote fetcher trait definition
//!
//! `QuoteFetcher` is the seam between the price aggregator and the
//! individual exchanges. The aggregator only ever calls `fetch_quote`,
//! which cannot fail.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::adapters::errors::FetchResult;
use crate::adapters::types::validate_price;

/// Common trait for all quote sources
///
/// Implementors provide `try_fetch`, a single attempt that reports *why*
/// it failed. `fetch_quote` wraps it and collapses every failure into
/// `None` after logging a diagnostic.
///
/// # Example Implementation
///
/// ```ignore
/// struct FixedQuote(f64);
///
/// #[async_trait]
/// impl QuoteFetcher for FixedQuote {
///     fn name(&self) -> &str { "Fixed" }
///     async fn try_fetch(&self) -> FetchResult<f64> { Ok(self.0) }
/// }
/// ```
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    /// Provider display name, used as the snapshot key
    fn name(&self) -> &str;

    /// One request, one parse, no retry
    async fn try_fetch(&self) -> FetchResult<f64>;

    /// Fetch a quote, returning `None` on any failure
    ///
    /// Provider-side failures (network, timeout, status) and response-shape
    /// failures are logged with different messages so a changed response
    /// format is distinguishable from an outage.
    async fn fetch_quote(&self) -> Option<f64> {
        match self.try_fetch().await.and_then(validate_price) {
            Ok(price) => {
                debug!(provider = %self.name(), price = price, "Quote received");
                Some(price)
            }
            Err(e) if e.is_provider_issue() => {
                warn!(
                    provider = %self.name(),
                    kind = e.kind(),
                    error = %e,
                    "Provider unavailable, quote absent"
                );
                None
            }
            Err(e) => {
                warn!(
                    provider = %self.name(),
                    kind = e.kind(),
                    error = %e,
                    "Unexpected response shape, quote absent"
                );
                None
            }
        }
    }
}
