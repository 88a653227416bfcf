//! Reporting loop
//!
//! One state, "scanning": fetch → render prices → scan → render result →
//! wait → repeat, until the cancellation token fires. Both the fetch phase
//! and the wait are interruptible.

use std::io::Write;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ScannerConfig;
use crate::core::aggregator::PriceAggregator;
use crate::core::report::render_cycle;
use crate::core::scanner::find_opportunities;
use crate::core::types::{Opportunity, PriceSnapshot};

/// Loop parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSettings {
    /// Minimum profit percentage reported
    pub threshold_percent: f64,
    /// Pause between cycles
    pub poll_interval: Duration,
}

impl From<&ScannerConfig> for ScanSettings {
    fn from(config: &ScannerConfig) -> Self {
        Self {
            threshold_percent: config.threshold_percent,
            poll_interval: config.poll_interval(),
        }
    }
}

/// Result of one fetch + scan round
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// 1-based cycle number
    pub cycle: u64,
    pub snapshot: PriceSnapshot,
    pub opportunities: Vec<Opportunity>,
}

/// Fetch a snapshot and scan it. Never fails: absent quotes are skipped.
pub async fn run_cycle(
    aggregator: &PriceAggregator,
    threshold_percent: f64,
    cycle: u64,
) -> CycleReport {
    let snapshot = aggregator.snapshot().await;
    let opportunities = find_opportunities(&snapshot, threshold_percent);

    debug!(
        cycle = cycle,
        taken_at = %snapshot.taken_at.format("%H:%M:%S%.3f"),
        present = snapshot.present_count(),
        providers = snapshot.len(),
        opportunities = opportunities.len(),
        "Cycle complete"
    );
    for opp in &opportunities {
        info!(
            cycle = cycle,
            buy = %opp.buy_provider,
            buy_price = opp.buy_price,
            sell = %opp.sell_provider,
            sell_price = opp.sell_price,
            profit = %format!("{:.3}%", opp.profit_percent),
            "🔥 Arbitrage opportunity detected"
        );
    }

    CycleReport {
        cycle,
        snapshot,
        opportunities,
    }
}

/// Run cycles until `cancel` fires, rendering each to `out`.
///
/// Returns the number of cycles completed. A cycle interrupted during its
/// fetch phase is dropped without being rendered.
pub async fn scan_loop<W: Write>(
    aggregator: &PriceAggregator,
    settings: ScanSettings,
    out: &mut W,
    cancel: CancellationToken,
) -> u64 {
    info!(
        providers = ?aggregator.providers(),
        threshold = settings.threshold_percent,
        interval_ms = settings.poll_interval.as_millis() as u64,
        "Scan loop started"
    );

    let mut completed: u64 = 0;

    loop {
        let report = tokio::select! {
            biased;
            // Shutdown takes priority
            _ = cancel.cancelled() => break,
            report = run_cycle(aggregator, settings.threshold_percent, completed + 1) => report,
        };
        completed = report.cycle;

        if let Err(e) = render_cycle(out, &report.snapshot, &report.opportunities) {
            warn!(cycle = report.cycle, error = %e, "Failed to write cycle report");
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(settings.poll_interval) => {}
        }
    }

    info!(cycles = completed, "Scan loop stopped");
    completed
}
