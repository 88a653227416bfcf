//! Console rendering of a scan cycle.
//!
//! Writers are generic so the exact console text can be asserted in tests;
//! the binary passes a locked stdout.

use std::io::{self, Write};
use std::time::Duration;

use crate::core::types::{Opportunity, PriceSnapshot, Quote};

/// Width of the dashed line closing each cycle
pub const SEPARATOR_WIDTH: usize = 40;

/// Shown in place of a price when the provider's quote is absent
pub const ABSENT_LABEL: &str = "unavailable";

/// Start-up banner, printed once
pub fn render_banner<W: Write>(out: &mut W, poll_interval: Duration) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚀 Real-Time Crypto Arbitrage Scanner Started")?;
    writeln!(
        out,
        "Scanning exchanges every {} seconds...",
        poll_interval.as_secs_f64()
    )?;
    writeln!(out)?;
    Ok(())
}

/// Prices always carry a fractional part (`100.0`, `67012.5`)
fn format_price(price: f64) -> String {
    format!("{:?}", price)
}

fn format_quote(quote: &Quote) -> String {
    match quote.price {
        Some(price) => format_price(price),
        None => ABSENT_LABEL.to_string(),
    }
}

/// Price table: every provider in snapshot order, absent ones included
pub fn render_snapshot<W: Write>(out: &mut W, snapshot: &PriceSnapshot) -> io::Result<()> {
    writeln!(out, "Live Prices:")?;
    for quote in snapshot.quotes() {
        writeln!(out, "  {:<10} : {}", quote.provider, format_quote(quote))?;
    }
    Ok(())
}

/// Opportunity list, or the explicit "none" line
pub fn render_opportunities<W: Write>(out: &mut W, opportunities: &[Opportunity]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Checking Arbitrage Opportunities...")?;

    if opportunities.is_empty() {
        writeln!(out, "❌ No profitable arbitrage right now.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "🔥 PROFITABLE ARBITRAGE FOUND!")?;
    for opp in opportunities {
        writeln!(out)?;
        writeln!(out, "Buy on {} @ {}", opp.buy_provider, format_price(opp.buy_price))?;
        writeln!(out, "Sell on {} @ {}", opp.sell_provider, format_price(opp.sell_price))?;
        writeln!(out, "➡ Profit: {}%", format_price(opp.profit_percent))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Full cycle: price table, scan result, separator
pub fn render_cycle<W: Write>(
    out: &mut W,
    snapshot: &PriceSnapshot,
    opportunities: &[Opportunity],
) -> io::Result<()> {
    render_snapshot(out, snapshot)?;
    render_opportunities(out, opportunities)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::find_opportunities;

    fn render(snapshot: &PriceSnapshot, opportunities: &[Opportunity]) -> String {
        let mut buf = Vec::new();
        render_cycle(&mut buf, snapshot, opportunities).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner_mentions_interval() {
        let mut buf = Vec::new();
        render_banner(&mut buf, Duration::from_secs(5)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Arbitrage Scanner Started"));
        assert!(text.contains("every 5 seconds"));
    }

    #[test]
    fn test_price_table_lists_every_provider() {
        let snapshot = PriceSnapshot::from_prices([
            ("Binance", Some(67012.5)),
            ("KuCoin", None),
            ("Kraken", Some(67005.1)),
        ]);
        let text = render(&snapshot, &[]);

        assert!(text.starts_with("Live Prices:\n"));
        assert!(text.contains("  Binance    : 67012.5\n"));
        assert!(text.contains("  KuCoin     : unavailable\n"));
        assert!(text.contains("  Kraken     : 67005.1\n"));
        let binance = text.find("Binance").unwrap();
        let kucoin = text.find("KuCoin").unwrap();
        let kraken = text.find("Kraken").unwrap();
        assert!(binance < kucoin && kucoin < kraken);
    }

    #[test]
    fn test_whole_prices_keep_fractional_part() {
        let snapshot = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", Some(101.0))]);
        let text = render(&snapshot, &find_opportunities(&snapshot, 1.0));

        assert!(text.contains("  A          : 100.0\n"));
        assert!(text.contains("  B          : 101.0\n"));
        assert!(text.contains("Buy on A @ 100.0\n"));
        assert!(text.contains("Sell on B @ 101.0\n"));
        assert!(text.contains("➡ Profit: 1.0%\n"));
    }

    #[test]
    fn test_no_opportunity_line_and_separator() {
        let snapshot = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", Some(100.0))]);
        let text = render(&snapshot, &find_opportunities(&snapshot, 1.0));

        assert!(text.contains("❌ No profitable arbitrage right now."));
        assert!(!text.contains("PROFITABLE ARBITRAGE FOUND"));
        assert!(text.ends_with(&format!("{}\n", "-".repeat(40))));
    }

    #[test]
    fn test_opportunity_lines() {
        let snapshot = PriceSnapshot::from_prices([("Coinbase", Some(99.0)), ("Binance", Some(100.0))]);
        let opportunities = find_opportunities(&snapshot, 1.0);
        let text = render(&snapshot, &opportunities);

        assert!(text.contains("🔥 PROFITABLE ARBITRAGE FOUND!"));
        assert!(text.contains("Buy on Coinbase @ 99.0\n"));
        assert!(text.contains("Sell on Binance @ 100.0\n"));
        assert!(text.contains("➡ Profit: 1.01%\n"));
        assert!(!text.contains("No profitable arbitrage"));
    }
}
