//! Pairwise arbitrage scanner.
//!
//! Every ordered pair (source, destination) of distinct providers with
//! usable prices is evaluated. Because both directions are checked, a real
//! gap shows up once, from the cheaper side to the dearer side; the reverse
//! direction is negative and only qualifies when the threshold is.

use tracing::trace;

use crate::config::constants::PROFIT_DECIMALS;
use crate::core::types::{Opportunity, PriceSnapshot};

/// Percentage gain of selling at `destination` after buying at `source`.
#[inline]
pub fn profit_percent(source: f64, destination: f64) -> f64 {
    ((destination - source) / source) * 100.0
}

/// Round to `decimals` places, exact ties to even (1.5625 -> 1.562)
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Find all ordered provider pairs whose profit meets `threshold_percent`.
///
/// - Pairs touching an absent (or non-positive) quote are skipped.
/// - The comparison is inclusive and uses the unrounded profit.
/// - Zero and negative thresholds are honoured as given.
/// - Output order is source-major, destination-minor, in snapshot order.
pub fn find_opportunities(snapshot: &PriceSnapshot, threshold_percent: f64) -> Vec<Opportunity> {
    let quotes = snapshot.quotes();
    let mut opportunities = Vec::new();

    for (i, source) in quotes.iter().enumerate() {
        let Some(buy_price) = source.usable_price() else {
            continue;
        };

        for (j, destination) in quotes.iter().enumerate() {
            if i == j || source.provider == destination.provider {
                continue;
            }
            let Some(sell_price) = destination.usable_price() else {
                continue;
            };

            let profit = profit_percent(buy_price, sell_price);
            trace!(
                buy = %source.provider,
                sell = %destination.provider,
                profit = profit,
                "Pair evaluated"
            );

            if profit >= threshold_percent {
                opportunities.push(Opportunity {
                    buy_provider: source.provider.clone(),
                    buy_price,
                    sell_provider: destination.provider.clone(),
                    sell_price,
                    profit_percent: round_to(profit, PROFIT_DECIMALS),
                });
            }
        }
    }

    opportunities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(opps: &'a [Opportunity], buy: &str, sell: &str) -> Option<&'a Opportunity> {
        opps.iter()
            .find(|o| o.buy_provider.as_ref() == buy && o.sell_provider.as_ref() == sell)
    }

    #[test]
    fn test_profit_percent() {
        assert_eq!(profit_percent(100.0, 101.0), 1.0);
        assert!((profit_percent(99.0, 100.0) - 1.0101).abs() < 1e-4);
        assert!(profit_percent(101.0, 100.0) < 0.0);
    }

    #[test]
    fn test_round_to_three_decimals() {
        assert_eq!(round_to(1.0101010101, 3), 1.01);
        assert_eq!(round_to(2.0202020202, 3), 2.02);
        assert_eq!(round_to(5.2631578947, 3), 5.263);
        assert_eq!(round_to(-5.0, 3), -5.0);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(1.5625, 3), 1.562);
        assert_eq!(round_to(0.3125, 3), 0.312);
        assert_eq!(round_to(-1.5625, 3), -1.562);
    }

    #[test]
    fn test_tied_profit_rounds_to_even() {
        let snapshot = PriceSnapshot::from_prices([
            ("A", Some(64.0)),
            ("B", Some(65.0)),
            ("C", Some(320.0)),
            ("D", Some(321.0)),
        ]);

        let opps = find_opportunities(&snapshot, 0.3);

        assert_eq!(find(&opps, "A", "B").unwrap().profit_percent, 1.562);
        assert_eq!(find(&opps, "C", "D").unwrap().profit_percent, 0.312);
    }

    #[test]
    fn test_scenario_mixed_with_absent_quote() {
        let snapshot = PriceSnapshot::from_prices([
            ("A", Some(100.0)),
            ("B", Some(101.0)),
            ("C", None),
            ("D", Some(99.0)),
        ]);

        let opps = find_opportunities(&snapshot, 1.0);

        assert_eq!(find(&opps, "A", "B").unwrap().profit_percent, 1.0);
        assert_eq!(find(&opps, "D", "A").unwrap().profit_percent, 1.01);
        assert_eq!(find(&opps, "D", "B").unwrap().profit_percent, 2.02);
        assert_eq!(opps.len(), 3);
        assert!(opps
            .iter()
            .all(|o| o.buy_provider.as_ref() != "C" && o.sell_provider.as_ref() != "C"));
    }

    #[test]
    fn test_scenario_equal_prices_below_threshold() {
        let snapshot = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", Some(100.0))]);
        assert!(find_opportunities(&snapshot, 1.0).is_empty());
    }

    #[test]
    fn test_scenario_all_absent() {
        let snapshot = PriceSnapshot::from_prices([
            ("A", None),
            ("B", None),
            ("C", None),
            ("D", None),
        ]);
        assert!(find_opportunities(&snapshot, 1.0).is_empty());
        assert!(find_opportunities(&snapshot, -100.0).is_empty());
    }

    #[test]
    fn test_scenario_negative_threshold_reports_both_directions() {
        let snapshot = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", Some(95.0))]);

        let opps = find_opportunities(&snapshot, -5.0);

        assert_eq!(opps.len(), 2);
        assert_eq!(find(&opps, "A", "B").unwrap().profit_percent, -5.0);
        assert_eq!(find(&opps, "B", "A").unwrap().profit_percent, 5.263);
    }

    #[test]
    fn test_equal_prices_zero_threshold_is_inclusive() {
        let snapshot = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", Some(100.0))]);
        let opps = find_opportunities(&snapshot, 0.0);
        assert_eq!(opps.len(), 2);
        assert!(opps.iter().all(|o| o.profit_percent == 0.0));
    }

    #[test]
    fn test_exact_threshold_boundary_is_inclusive() {
        let snapshot = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", Some(101.0))]);
        let opps = find_opportunities(&snapshot, 1.0);
        assert_eq!(opps.len(), 1);
        assert_eq!(opps[0].buy_provider.as_ref(), "A");
    }

    #[test]
    fn test_fewer_than_two_present_quotes_is_empty() {
        let one = PriceSnapshot::from_prices([("A", Some(100.0)), ("B", None)]);
        assert!(find_opportunities(&one, -50.0).is_empty());

        let none = PriceSnapshot::new(vec![]);
        assert!(find_opportunities(&none, 0.0).is_empty());
    }

    #[test]
    fn test_non_positive_prices_are_skipped() {
        let snapshot = PriceSnapshot::from_prices([
            ("A", Some(0.0)),
            ("B", Some(100.0)),
            ("C", Some(-10.0)),
        ]);
        assert!(find_opportunities(&snapshot, -1000.0).is_empty());
    }

    #[test]
    fn test_order_is_source_major() {
        let snapshot = PriceSnapshot::from_prices([
            ("A", Some(100.0)),
            ("B", Some(110.0)),
            ("C", Some(90.0)),
        ]);
        let opps = find_opportunities(&snapshot, -100.0);
        let pairs: Vec<(&str, &str)> = opps
            .iter()
            .map(|o| (o.buy_provider.as_ref(), o.sell_provider.as_ref()))
            .collect();
        assert_eq!(
            pairs,
            vec![("A", "B"), ("A", "C"), ("B", "A"), ("B", "C"), ("C", "A"), ("C", "B")]
        );
    }

    #[test]
    fn test_properties_hold_over_price_grid() {
        let grid = [None, Some(0.5), Some(95.0), Some(99.0), Some(100.0), Some(101.0), Some(250.0)];
        let thresholds = [-10.0, -1.0, 0.0, 0.5, 1.0, 5.0];

        for &a in &grid {
            for &b in &grid {
                for &c in &grid {
                    let snapshot = PriceSnapshot::from_prices([("A", a), ("B", b), ("C", c)]);
                    for &threshold in &thresholds {
                        let opps = find_opportunities(&snapshot, threshold);

                        if snapshot.present_count() < 2 {
                            assert!(opps.is_empty());
                        }

                        for o in &opps {
                            assert_ne!(o.buy_provider, o.sell_provider);
                            let raw = profit_percent(o.buy_price, o.sell_price);
                            assert!(raw >= threshold);
                            assert_eq!(o.profit_percent, round_to(raw, 3));
                            assert_eq!(snapshot.price(&o.buy_provider), Some(o.buy_price));
                            assert_eq!(snapshot.price(&o.sell_provider), Some(o.sell_price));
                        }

                        let distinct_present = {
                            let mut prices: Vec<f64> = snapshot
                                .quotes()
                                .iter()
                                .filter_map(|q| q.usable_price())
                                .collect();
                            prices.sort_by(|x, y| x.total_cmp(y));
                            prices.dedup();
                            prices.len()
                        };
                        if threshold <= 0.0 && distinct_present >= 2 {
                            assert!(!opps.is_empty());
                        }
                    }
                }
            }
        }
    }
}
