use super::types::{ArbitrageOpportunity, SpreadConfig};
use crate::models::Quote;

/// Percentage by which `max` exceeds `min`.
pub fn spread_percent(min: f64, max: f64) -> f64 {
    (max - min) / min * 100.0
}

/// Evaluate the cross-exchange spread for one symbol.
///
/// Quotes without a price are ignored. Fewer than two priced quotes means no
/// opportunity. On equal prices the earliest quote keeps the max/min slot.
pub fn evaluate_spread(
    symbol: &str,
    quotes: &[Quote],
    config: &SpreadConfig,
) -> Option<ArbitrageOpportunity> {
    let mut priced = quotes
        .iter()
        .filter_map(|q| q.price.map(|p| (q.exchange.as_str(), p)));

    let first = priced.next()?;
    let (mut low, mut high) = (first, first);
    let mut count = 1usize;

    for (exchange, price) in priced {
        count += 1;
        if price > high.1 {
            high = (exchange, price);
        }
        if price < low.1 {
            low = (exchange, price);
        }
    }

    if count < 2 {
        return None;
    }

    let (buy_exchange, buy_price) = low;
    let (sell_exchange, sell_price) = high;
    let percent_diff = spread_percent(buy_price, sell_price);

    if percent_diff >= config.threshold_percent {
        Some(ArbitrageOpportunity {
            symbol: symbol.to_string(),
            buy_exchange: buy_exchange.to_string(),
            buy_price,
            sell_exchange: sell_exchange.to_string(),
            sell_price,
            profit: sell_price - buy_price,
            percent_diff,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(prices: &[(&str, Option<f64>)]) -> Vec<Quote> {
        prices
            .iter()
            .map(|(ex, p)| Quote::new(*ex, "xrp", *p))
            .collect()
    }

    fn cfg(threshold_percent: f64) -> SpreadConfig {
        SpreadConfig { threshold_percent }
    }

    #[test]
    fn fewer_than_two_prices_is_skipped() {
        let zero_threshold = cfg(0.0);
        assert!(evaluate_spread("xrp", &[], &zero_threshold).is_none());
        assert!(evaluate_spread("xrp", &quotes(&[("A", Some(1.0))]), &zero_threshold).is_none());
        assert!(
            evaluate_spread(
                "xrp",
                &quotes(&[("A", Some(1.0)), ("B", None), ("C", None)]),
                &zero_threshold
            )
            .is_none()
        );
    }

    #[test]
    fn spread_above_threshold_signals_min_buy_max_sell() {
        let q = quotes(&[("A", Some(100.0)), ("B", Some(100.5)), ("C", None)]);
        let opp = evaluate_spread("xrp", &q, &cfg(0.2)).expect("0.5% spread should signal");
        assert_eq!(opp.symbol, "xrp");
        assert_eq!(opp.buy_exchange, "A");
        assert_eq!(opp.buy_price, 100.0);
        assert_eq!(opp.sell_exchange, "B");
        assert_eq!(opp.sell_price, 100.5);
        assert!((opp.profit - 0.5).abs() < 1e-9);
        assert!((opp.percent_diff - 0.5).abs() < 1e-9);
    }

    #[test]
    fn spread_below_threshold_is_ignored() {
        let q = quotes(&[("A", Some(100.0)), ("B", Some(100.1))]);
        assert!(evaluate_spread("xrp", &q, &cfg(0.2)).is_none());
    }

    #[test]
    fn spread_equal_to_threshold_signals() {
        let q = quotes(&[("A", Some(200.0)), ("B", Some(201.0))]);
        let opp = evaluate_spread("xrp", &q, &cfg(0.5)).expect("0.5% meets 0.5% threshold");
        assert_eq!(opp.buy_exchange, "A");
    }

    #[test]
    fn invalid_prices_do_not_count() {
        let q = quotes(&[("A", Some(0.0)), ("B", Some(-3.0)), ("C", Some(f64::NAN)), ("D", Some(5.0))]);
        assert!(evaluate_spread("xrp", &q, &cfg(0.0)).is_none());
    }

    #[test]
    fn ties_keep_first_exchange() {
        let q = quotes(&[
            ("A", Some(10.0)),
            ("B", Some(10.0)),
            ("C", Some(11.0)),
            ("D", Some(11.0)),
        ]);
        let opp = evaluate_spread("xrp", &q, &cfg(1.0)).expect("10% spread");
        assert_eq!(opp.buy_exchange, "A");
        assert_eq!(opp.sell_exchange, "C");
    }

    #[test]
    fn max_never_below_min() {
        let grid = [0.5, 1.0, 99.9, 100.0, 100.01, 250.0, 31_000.0];
        for &a in &grid {
            for &b in &grid {
                for &c in &grid {
                    let q = quotes(&[("A", Some(a)), ("B", Some(b)), ("C", Some(c))]);
                    let opp = evaluate_spread("xrp", &q, &cfg(0.0)).expect("zero threshold");
                    assert!(opp.sell_price >= opp.buy_price);
                    assert!(opp.percent_diff >= 0.0);
                    assert!(opp.profit >= 0.0);
                }
            }
        }
    }
}
