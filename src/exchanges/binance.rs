use super::{PriceField, PriceSource, get_body, settle};
use crate::errors::Result;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

const NAME: &str = "Binance";
const TICKER_PATH: &str = "api/v3/ticker/price";

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: PriceField,
}

/// Binance spot ticker: one request per pair, e.g. `?symbol=XRPUSDT`.
pub struct Binance {
    client: reqwest::Client,
    base: Url,
    quote_asset: String,
}

impl Binance {
    pub fn new(client: reqwest::Client, base_url: &str, quote_asset: &str) -> Result<Self> {
        Ok(Self {
            client,
            base: Url::parse(base_url)?,
            quote_asset: quote_asset.to_uppercase(),
        })
    }

    fn ticker_url(&self, symbol: &str) -> Result<Url> {
        let mut url = self.base.join(TICKER_PATH)?;
        let pair = format!("{}{}", symbol.to_uppercase(), self.quote_asset);
        url.query_pairs_mut().append_pair("symbol", &pair);
        Ok(url)
    }

    async fn try_fetch(&self, symbol: &str) -> Result<Option<f64>> {
        let body = get_body(&self.client, self.ticker_url(symbol)?).await?;
        parse_ticker(&body)
    }
}

fn parse_ticker(body: &str) -> Result<Option<f64>> {
    let ticker: TickerPrice = serde_json::from_str(body)?;
    Ok(ticker.price.value())
}

#[async_trait]
impl PriceSource for Binance {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_price(&self, symbol: &str) -> Option<f64> {
        settle(NAME, symbol, self.try_fetch(symbol).await)
    }
}
