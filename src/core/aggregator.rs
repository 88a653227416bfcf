//! Price aggregator: one concurrent fetch round across all providers.
//!
//! All fetches of a cycle are issued at once and joined, so a cycle takes
//! about as long as the slowest provider (bounded by its request timeout).
//! Each fetcher only produces its own quote; one failing or slow provider
//! never prevents the others from landing in the snapshot.

use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;
use tracing::debug;

use crate::adapters::QuoteFetcher;
use crate::core::types::{PriceSnapshot, Quote};

/// Fans out to every configured fetcher and collects a `PriceSnapshot`.
pub struct PriceAggregator {
    fetchers: Vec<Arc<dyn QuoteFetcher>>,
}

impl PriceAggregator {
    pub fn new(fetchers: Vec<Arc<dyn QuoteFetcher>>) -> Self {
        Self { fetchers }
    }

    /// Provider names in snapshot order
    pub fn providers(&self) -> Vec<&str> {
        self.fetchers.iter().map(|f| f.name()).collect()
    }

    /// Number of configured providers
    pub fn provider_count(&self) -> usize {
        self.fetchers.len()
    }

    /// Fetch every provider concurrently and assemble the snapshot.
    ///
    /// Quotes come back in configured order regardless of which request
    /// finished first.
    pub async fn snapshot(&self) -> PriceSnapshot {
        let taken_at = Utc::now();

        let fetches = self.fetchers.iter().map(|fetcher| async move {
            Quote::new(fetcher.name(), fetcher.fetch_quote().await)
        });
        let quotes = join_all(fetches).await;

        let snapshot = PriceSnapshot::at(taken_at, quotes);
        debug!(
            providers = snapshot.len(),
            present = snapshot.present_count(),
            elapsed_ms = (Utc::now() - taken_at).num_milliseconds(),
            "Snapshot collected"
        );
        snapshot
    }
}
