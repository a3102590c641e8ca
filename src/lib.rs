//! Cross-exchange spread watcher.
//!
//! Polls public ticker endpoints for a fixed list of symbols, flags any
//! spread at or above the configured threshold and pushes an alert to
//! Telegram.

pub mod aggregator;
pub mod arbitrage;
pub mod config;
pub mod errors;
pub mod exchanges;
pub mod models;
pub mod notifier;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
