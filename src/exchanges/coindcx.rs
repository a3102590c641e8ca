use super::{PriceField, PriceSource, get_body, settle};
use crate::errors::Result;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

const NAME: &str = "CoinDCX";
const TICKER_PATH: &str = "exchange/ticker";

#[derive(Debug, Deserialize)]
struct MarketTicker {
    #[serde(default)]
    market: Option<String>,
    #[serde(default)]
    last_price: Option<PriceField>,
}

/// CoinDCX only publishes a ticker for every market at once; the pair is
/// picked out of the full list.
pub struct CoinDcx {
    client: reqwest::Client,
    base: Url,
    quote_asset: String,
}

impl CoinDcx {
    pub fn new(client: reqwest::Client, base_url: &str, quote_asset: &str) -> Result<Self> {
        Ok(Self {
            client,
            base: Url::parse(base_url)?,
            quote_asset: quote_asset.to_uppercase(),
        })
    }

    fn market_name(&self, symbol: &str) -> String {
        format!("{}{}", symbol.to_uppercase(), self.quote_asset)
    }

    async fn try_fetch(&self, symbol: &str) -> Result<Option<f64>> {
        let url = self.base.join(TICKER_PATH)?;
        let body = get_body(&self.client, url).await?;
        parse_tickers(&body, &self.market_name(symbol))
    }
}

fn parse_tickers(body: &str, market: &str) -> Result<Option<f64>> {
    let tickers: Vec<MarketTicker> = serde_json::from_str(body)?;
    Ok(tickers
        .iter()
        .find(|t| t.market.as_deref() == Some(market))
        .and_then(|t| t.last_price.as_ref())
        .and_then(PriceField::value))
}

#[async_trait]
impl PriceSource for CoinDcx {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_price(&self, symbol: &str) -> Option<f64> {
        settle(NAME, symbol, self.try_fetch(symbol).await)
    }
}
