//! Arbitrage scanner entry point
//!
//! 1. Loads `.env`, logging and configuration
//! 2. Builds one quote fetcher per configured exchange
//! 3. Runs the scan loop until Ctrl+C

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use arb_scanner::adapters::create_fetchers;
use arb_scanner::config::{self, constants, init_logging};
use arb_scanner::core::{render_banner, scan_loop, PriceAggregator, ScanSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();
    init_logging();

    let config_path = constants::config_path();
    let config = match config::load_config_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(path = %config_path.display(), error = %e, "Configuration failed");
            return Err(e.into());
        }
    };

    info!(
        threshold = config.threshold_percent,
        interval_secs = config.poll_interval_secs,
        timeout_secs = config.request_timeout_secs,
        providers = config.providers.len(),
        "Scanner configuration"
    );

    let aggregator = PriceAggregator::new(create_fetchers(&config));
    let settings = ScanSettings::from(&config);

    // Ctrl+C cancels the loop; it stops at the next fetch or wait boundary
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("[SHUTDOWN] Graceful shutdown initiated");
                shutdown.cancel();
            }
            Err(err) => {
                error!(error = %err, "Failed to listen for Ctrl+C signal");
            }
        }
    });

    let mut stdout = std::io::stdout();
    render_banner(&mut stdout, settings.poll_interval)?;

    let cycles = scan_loop(&aggregator, settings, &mut stdout, cancel).await;

    info!(cycles = cycles, "[SHUTDOWN] Clean exit");
    Ok(())
}
