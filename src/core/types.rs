//! Core data types for the fetch → scan → report pipeline.
//!
//! A `PriceSnapshot` holds one `Quote` per provider for a single cycle;
//! `Opportunity` records are derived from it and discarded with it.

use std::sync::Arc;

use chrono::{DateTime, Utc};

// =============================================================================
// Quote (from a single provider)
// =============================================================================

/// One provider's price for the current cycle.
///
/// `price` is `None` when the fetch failed for any reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Provider display name (e.g. "Binance")
    pub provider: Arc<str>,
    /// Price in the common quote currency (USD-equivalent)
    pub price: Option<f64>,
}

impl Quote {
    pub fn new(provider: impl Into<Arc<str>>, price: Option<f64>) -> Self {
        Self {
            provider: provider.into(),
            price,
        }
    }

    pub fn absent(provider: impl Into<Arc<str>>) -> Self {
        Self::new(provider, None)
    }

    /// Price if present, finite and strictly positive.
    ///
    /// A zero or negative price can never come from a live ticker and would
    /// make the profit computation meaningless, so it counts as absent.
    #[inline]
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p > 0.0)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.usable_price().is_some()
    }
}

// =============================================================================
// Price Snapshot (all providers, one cycle)
// =============================================================================

/// Quotes gathered across all providers in one polling cycle.
///
/// Quotes keep the configured provider order, which is also the display
/// and scan order.
#[derive(Debug, Clone)]
pub struct PriceSnapshot {
    /// When the cycle's fetches were issued
    pub taken_at: DateTime<Utc>,
    quotes: Vec<Quote>,
}

impl PriceSnapshot {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self::at(Utc::now(), quotes)
    }

    pub fn at(taken_at: DateTime<Utc>, quotes: Vec<Quote>) -> Self {
        Self { taken_at, quotes }
    }

    /// Build from `(provider, price)` pairs
    pub fn from_prices<'a, I>(prices: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<f64>)>,
    {
        Self::new(
            prices
                .into_iter()
                .map(|(provider, price)| Quote::new(provider, price))
                .collect(),
        )
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn get(&self, provider: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.provider.as_ref() == provider)
    }

    /// Usable price for a provider, `None` if unknown or absent
    pub fn price(&self, provider: &str) -> Option<f64> {
        self.get(provider).and_then(Quote::usable_price)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Number of providers with a usable price
    pub fn present_count(&self) -> usize {
        self.quotes.iter().filter(|q| q.is_present()).count()
    }
}

// =============================================================================
// Arbitrage Opportunity
// =============================================================================

/// Buy on one provider, sell on another.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    /// Source provider (buy here)
    pub buy_provider: Arc<str>,
    /// Source price
    pub buy_price: f64,
    /// Destination provider (sell here)
    pub sell_provider: Arc<str>,
    /// Destination price
    pub sell_price: f64,
    /// (sell - buy) / buy * 100, rounded to 3 decimals
    pub profit_percent: f64,
}
