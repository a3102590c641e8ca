//! Scan loop: fetch every symbol from every exchange, look for a spread, alert.

use crate::{
    arbitrage::{ArbitrageOpportunity, SpreadConfig, evaluate_spread},
    config::AppConfig,
    exchanges::Exchanges,
    models::CycleSummary,
    notifier::Notifier,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// What happened to one symbol in one cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Fewer than two exchanges returned a price.
    InsufficientQuotes,
    BelowThreshold,
    Notified(ArbitrageOpportunity),
    /// Opportunity found but the alert could not be delivered.
    NotifyFailed(ArbitrageOpportunity),
}

pub struct Scanner {
    exchanges: Exchanges,
    notifier: Arc<dyn Notifier>,
    symbols: Vec<String>,
    spread: SpreadConfig,
    interval: Duration,
}

impl Scanner {
    pub fn new(exchanges: Exchanges, notifier: Arc<dyn Notifier>, config: &AppConfig) -> Self {
        Self {
            exchanges,
            notifier,
            symbols: config.symbols.clone(),
            spread: SpreadConfig {
                threshold_percent: config.threshold_percent,
            },
            interval: config.check_interval(),
        }
    }

    pub async fn scan_symbol(&self, symbol: &str) -> ScanOutcome {
        let quotes = self.exchanges.quotes_for(symbol).await;
        let priced = quotes.iter().filter(|q| q.price.is_some()).count();
        if priced < 2 {
            debug!(symbol, priced, "[SKIP] not enough quotes");
            return ScanOutcome::InsufficientQuotes;
        }

        let Some(opp) = evaluate_spread(symbol, &quotes, &self.spread) else {
            debug!(symbol, ?quotes, "[SCAN] spread below threshold");
            return ScanOutcome::BelowThreshold;
        };

        info!(
            symbol,
            buy = %opp.buy_exchange,
            buy_price = opp.buy_price,
            sell = %opp.sell_exchange,
            sell_price = opp.sell_price,
            percent_diff = opp.percent_diff,
            "[OPP] spread above threshold"
        );

        match self.notifier.notify(&opp).await {
            Ok(()) => ScanOutcome::Notified(opp),
            Err(e) => {
                error!(symbol, error = %e, "[NOTIFY] failed to deliver alert");
                ScanOutcome::NotifyFailed(opp)
            }
        }
    }

    /// One pass over every configured symbol, in order.
    pub async fn run_cycle(&self) -> CycleSummary {
        let mut summary = CycleSummary::default();
        for symbol in &self.symbols {
            summary.symbols_scanned += 1;
            match self.scan_symbol(symbol).await {
                ScanOutcome::Notified(_) => summary.opportunities += 1,
                ScanOutcome::NotifyFailed(_) => {
                    summary.opportunities += 1;
                    summary.notify_failures += 1;
                }
                ScanOutcome::InsufficientQuotes | ScanOutcome::BelowThreshold => {}
            }
        }
        summary
    }

    /// Scan, sleep, repeat. Never returns.
    pub async fn run(self) {
        let mut cycles: u64 = 0;
        loop {
            let summary = self.run_cycle().await;
            cycles += 1;
            info!(
                cycles,
                symbols = summary.symbols_scanned,
                opportunities = summary.opportunities,
                notify_failures = summary.notify_failures,
                "[HEARTBEAT] cycle complete"
            );
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Spawn the scan loop as a background task
pub fn spawn_scanner(scanner: Scanner) -> tokio::task::JoinHandle<()> {
    tokio::spawn(scanner.run())
}
