//! Application-wide constants and configuration defaults
//!
//! This module centralizes the hardcoded values that apply when no
//! configuration file overrides them.

use std::path::PathBuf;

// =============================================================================
// Scan defaults
// =============================================================================

/// Minimum profit percentage reported as an opportunity (1%)
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 1.0;

/// Pause between two scan cycles (seconds)
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Per-request timeout for each ticker fetch (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Decimal places kept in a reported profit percentage
pub const PROFIT_DECIMALS: i32 = 3;

// =============================================================================
// Config file location
// =============================================================================

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration file path (default: `config.yaml`)
///
/// Environment variable: `SCANNER_CONFIG`
pub fn config_path() -> PathBuf {
    std::env::var("SCANNER_CONFIG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
