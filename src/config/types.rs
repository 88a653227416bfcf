//! Configuration types for the scanner
//!
//! This module defines the configuration structs loaded from YAML.
//! Every field has a default, so an empty document (or no file at all)
//! yields the built-in four-exchange setup.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_THRESHOLD_PERCENT,
};
use crate::error::{AppError, Result};

// ============================================================================
// Enums
// ============================================================================

/// Supported quote providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Binance,
    Kucoin,
    Kraken,
    Coinbase,
}

impl Provider {
    /// All providers in their canonical display order
    pub const ALL: [Provider; 4] = [
        Provider::Binance,
        Provider::Kucoin,
        Provider::Kraken,
        Provider::Coinbase,
    ];
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Binance => write!(f, "Binance"),
            Provider::Kucoin => write!(f, "KuCoin"),
            Provider::Kraken => write!(f, "Kraken"),
            Provider::Coinbase => write!(f, "Coinbase"),
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// One provider entry: which exchange, and optional overrides
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    pub provider: Provider,
    /// Trading pair in the provider's native format (e.g. "XBTUSDT" on Kraken)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// API root, e.g. "https://api.binance.com"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            symbol: None,
            base_url: None,
        }
    }

    /// Validate provider entry rules
    pub fn validate(&self) -> Result<()> {
        if let Some(symbol) = &self.symbol {
            if symbol.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "Provider '{}': symbol cannot be empty",
                    self.provider
                )));
            }
        }

        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "Provider '{}': base_url must start with http:// or https:// (got '{}')",
                    self.provider, url
                )));
            }
        }

        Ok(())
    }
}

/// Root scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScannerConfig {
    /// Minimum profit percentage to report (e.g. 1.0 = 1%). Zero or
    /// negative values are allowed and report nearly every pair.
    pub threshold_percent: f64,
    /// Pause between cycles
    pub poll_interval_secs: u64,
    /// Per-request timeout for each ticker fetch
    pub request_timeout_secs: u64,
    /// Providers in display and scan order
    pub providers: Vec<ProviderConfig>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            providers: Provider::ALL.into_iter().map(ProviderConfig::new).collect(),
        }
    }
}

impl ScannerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate all configuration rules
    pub fn validate(&self) -> Result<()> {
        // Rule: no NaN or Infinity in the threshold
        if !self.threshold_percent.is_finite() {
            return Err(AppError::Config(format!(
                "threshold_percent must be a finite number (got {})",
                self.threshold_percent
            )));
        }

        if self.poll_interval_secs == 0 {
            return Err(AppError::Config(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        // Rule: At least one provider must be configured
        if self.providers.is_empty() {
            return Err(AppError::Config(
                "Configuration must contain at least one provider".to_string(),
            ));
        }

        // Rule: No duplicate providers (names key the snapshot)
        let mut seen = HashSet::new();
        for entry in &self.providers {
            if !seen.insert(entry.provider) {
                return Err(AppError::Config(format!(
                    "Duplicate provider: '{}'",
                    entry.provider
                )));
            }
        }

        for entry in &self.providers {
            entry.validate()?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
