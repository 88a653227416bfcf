//! Fetcher factory
//!
//! Builds the configured `QuoteFetcher` list from `ScannerConfig`, sharing
//! one pooled HTTP client across all providers.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::adapters::exchange::ExchangeFetcher;
use crate::adapters::traits::QuoteFetcher;
use crate::adapters::types::create_http_client;
use crate::config::{ProviderConfig, ScannerConfig};

/// Create a single fetcher from its config entry
pub fn create_fetcher(
    entry: &ProviderConfig,
    http_client: &reqwest::Client,
    timeout: Duration,
) -> ExchangeFetcher {
    let mut fetcher = ExchangeFetcher::new(entry.provider, http_client.clone(), timeout);
    if let Some(symbol) = &entry.symbol {
        fetcher = fetcher.with_symbol(symbol.trim());
    }
    if let Some(base_url) = &entry.base_url {
        fetcher = fetcher.with_base_url(base_url.as_str());
    }
    fetcher
}

/// Create all fetchers, in configured order
pub fn create_fetchers(config: &ScannerConfig) -> Vec<Arc<dyn QuoteFetcher>> {
    let timeout = config.request_timeout();
    let http_client = create_http_client(timeout);

    config
        .providers
        .iter()
        .map(|entry| {
            let fetcher = create_fetcher(entry, &http_client, timeout);
            info!(
                phase = "init",
                provider = %entry.provider,
                symbol = fetcher.symbol(),
                base_url = fetcher.base_url(),
                "Quote fetcher configured"
            );
            Arc::new(fetcher) as Arc<dyn QuoteFetcher>
        })
        .collect()
}
