//! Quote adapters for Binance, KuCoin, Kraken, Coinbase
//!
//! Each exchange module owns its endpoint and a typed extraction rule for
//! its ticker response. `ExchangeFetcher` dispatches to them; anything
//! implementing `QuoteFetcher` can be plugged into the aggregator.

pub mod binance;
pub mod coinbase;
pub mod errors;
pub mod exchange;
pub mod factory;
pub mod kraken;
pub mod kucoin;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use errors::{FetchError, FetchResult};
pub use exchange::{default_base_url, default_symbol, ExchangeFetcher};
pub use factory::{create_fetcher, create_fetchers};
pub use traits::QuoteFetcher;
pub use types::create_http_client;
