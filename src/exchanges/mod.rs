//! Exchange price fetchers.
//!
//! Every exchange exposes its public ticker in a different shape. Each one gets
//! a `PriceSource` implementation that turns a symbol into a best-effort price;
//! `Exchanges` holds them in a fixed order and fans a symbol out to all of them.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{Quote, is_valid_price};
use async_trait::async_trait;
use futures::future::join_all;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub mod binance;
pub mod coindcx;
pub mod wazirx;

pub use binance::Binance;
pub use coindcx::CoinDcx;
pub use wazirx::WazirX;

/// A single exchange's public price feed.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Display name used in quotes and alerts.
    fn name(&self) -> &str;

    /// Latest price for `symbol` against the configured quote asset.
    /// Any failure is reported as `None`.
    async fn fetch_price(&self, symbol: &str) -> Option<f64>;
}

/// Ordered mapping from exchange name to its fetcher.
#[derive(Clone, Default)]
pub struct Exchanges {
    sources: Vec<Arc<dyn PriceSource>>,
}

impl Exchanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register another source. Insertion order decides tie-breaks downstream.
    pub fn with(mut self, source: impl PriceSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Binance, CoinDCX and WazirX, sharing one HTTP client.
    pub fn from_config(config: &AppConfig, client: reqwest::Client) -> Result<Self> {
        let quote = config.quote_asset.as_str();
        Ok(Self::new()
            .with(Binance::new(client.clone(), &config.binance_api_url, quote)?)
            .with(CoinDcx::new(client.clone(), &config.coindcx_api_url, quote)?)
            .with(WazirX::new(client, &config.wazirx_api_url, quote)?))
    }

    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PriceSource>> {
        self.sources.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Ask every exchange for `symbol` concurrently. Quotes come back in
    /// registration order regardless of which request finished first.
    pub async fn quotes_for(&self, symbol: &str) -> Vec<Quote> {
        let fetches = self.sources.iter().map(|source| async move {
            let price = source.fetch_price(symbol).await;
            Quote::new(source.name(), symbol, price)
        });
        join_all(fetches).await
    }
}

/// Price as exchanges send it: sometimes a JSON string, sometimes a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    pub(crate) fn value(&self) -> Option<f64> {
        let raw = match self {
            PriceField::Number(n) => Some(*n),
            PriceField::Text(s) => s.trim().parse().ok(),
        };
        raw.filter(|p| is_valid_price(*p))
    }
}

/// Collapse a fetch outcome into the "price or nothing" contract.
pub(crate) fn settle(exchange: &str, symbol: &str, outcome: Result<Option<f64>>) -> Option<f64> {
    match outcome {
        Ok(Some(price)) => Some(price),
        Ok(None) => {
            debug!(exchange, symbol, "[FETCH] no usable price");
            None
        }
        Err(e) => {
            debug!(exchange, symbol, error = %e, "[FETCH] request failed");
            None
        }
    }
}

/// GET a URL and return the body of a 2xx response.
pub(crate) async fn get_body(client: &reqwest::Client, url: url::Url) -> Result<String> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
