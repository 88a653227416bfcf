//! Core module - snapshot types, aggregation, scanning, reporting loop
//!
//! This module uses **explicit re-exports** instead of glob exports
//! (`pub use module::*`) to keep the public API visible in one place.
//!
//! ## Usage
//! Prefer importing from `crate::core`:
//! ```ignore
//! use arb_scanner::core::{find_opportunities, PriceAggregator, PriceSnapshot};
//! ```

pub mod aggregator;
pub mod report;
pub mod runtime;
pub mod scanner;
pub mod types;

// Explicit re-exports for types module
pub use types::{Opportunity, PriceSnapshot, Quote};

// Explicit re-exports for aggregator module
pub use aggregator::PriceAggregator;

// Explicit re-exports for scanner module
pub use scanner::{find_opportunities, profit_percent, round_to};

// Explicit re-exports for report module
pub use report::{render_banner, render_cycle, render_opportunities, render_snapshot};

// Explicit re-exports for runtime module
pub use runtime::{run_cycle, scan_loop, CycleReport, ScanSettings};
