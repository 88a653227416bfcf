//! Real-time crypto arbitrage scanner
//!
//! Polls public ticker endpoints of several exchanges, normalizes their
//! prices and reports cross-exchange gaps above a threshold:
//! - Quote adapters (Binance, KuCoin, Kraken, Coinbase) over HTTP
//! - Concurrent price aggregation into a per-cycle snapshot
//! - Pairwise opportunity scanner and console reporting loop

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;

pub use error::AppError;
