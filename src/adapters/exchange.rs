//! HTTP ticker fetcher for the built-in exchanges
//!
//! One `ExchangeFetcher` per configured provider. Request construction and
//! price extraction are dispatched on `Provider` to the per-exchange
//! modules, so adding an exchange means adding a module and a match arm.

use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::errors::{FetchError, FetchResult};
use crate::adapters::traits::QuoteFetcher;
use crate::adapters::{binance, coinbase, kraken, kucoin};
use crate::config::Provider;

/// Default trading-pair symbol in the provider's native format
pub fn default_symbol(provider: Provider) -> &'static str {
    match provider {
        Provider::Binance => binance::DEFAULT_SYMBOL,
        Provider::Kucoin => kucoin::DEFAULT_SYMBOL,
        Provider::Kraken => kraken::DEFAULT_SYMBOL,
        Provider::Coinbase => coinbase::DEFAULT_SYMBOL,
    }
}

/// Default public API root
pub fn default_base_url(provider: Provider) -> &'static str {
    match provider {
        Provider::Binance => binance::DEFAULT_BASE_URL,
        Provider::Kucoin => kucoin::DEFAULT_BASE_URL,
        Provider::Kraken => kraken::DEFAULT_BASE_URL,
        Provider::Coinbase => coinbase::DEFAULT_BASE_URL,
    }
}

/// Polls one exchange's public ticker endpoint
#[derive(Debug, Clone)]
pub struct ExchangeFetcher {
    provider: Provider,
    name: String,
    symbol: String,
    base_url: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl ExchangeFetcher {
    /// Create a fetcher with the provider's default symbol and endpoint
    pub fn new(provider: Provider, http_client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            provider,
            name: provider.to_string(),
            symbol: default_symbol(provider).to_string(),
            base_url: default_base_url(provider).to_string(),
            timeout,
            http_client,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(&self) -> reqwest::RequestBuilder {
        let client = &self.http_client;
        let (base, symbol) = (self.base_url.as_str(), self.symbol.as_str());
        let request = match self.provider {
            Provider::Binance => binance::build_request(client, base, symbol),
            Provider::Kucoin => kucoin::build_request(client, base, symbol),
            Provider::Kraken => kraken::build_request(client, base, symbol),
            Provider::Coinbase => coinbase::build_request(client, base, symbol),
        };
        request.timeout(self.timeout)
    }

    fn extract_price(&self, body: &str) -> FetchResult<f64> {
        match self.provider {
            Provider::Binance => binance::extract_price(body),
            Provider::Kucoin => kucoin::extract_price(body),
            Provider::Kraken => kraken::extract_price(body),
            Provider::Coinbase => coinbase::extract_price(body),
        }
    }

    fn map_request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout.as_millis() as u64)
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl QuoteFetcher for ExchangeFetcher {
    fn name(&self) -> &str {
        &self.name
    }

    async fn try_fetch(&self) -> FetchResult<f64> {
        let response = self
            .build_request()
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.extract_price(&body)
    }
}
