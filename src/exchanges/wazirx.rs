use super::{PriceField, PriceSource, get_body, settle};
use crate::errors::Result;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

const NAME: &str = "WazirX";

/// `last` shows up either at the top level or wrapped in `ticker`.
#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default)]
    last: Option<PriceField>,
    #[serde(default)]
    ticker: Option<TickerBody>,
}

#[derive(Debug, Deserialize)]
struct TickerBody {
    #[serde(default)]
    last: Option<PriceField>,
}

pub struct WazirX {
    client: reqwest::Client,
    base: Url,
    quote_asset: String,
}

impl WazirX {
    pub fn new(client: reqwest::Client, base_url: &str, quote_asset: &str) -> Result<Self> {
        Ok(Self {
            client,
            base: Url::parse(base_url)?,
            quote_asset: quote_asset.to_lowercase(),
        })
    }

    fn ticker_url(&self, symbol: &str) -> Result<Url> {
        let path = format!(
            "api/v2/tickers/{}{}",
            symbol.to_lowercase(),
            self.quote_asset
        );
        Ok(self.base.join(&path)?)
    }

    async fn try_fetch(&self, symbol: &str) -> Result<Option<f64>> {
        let body = get_body(&self.client, self.ticker_url(symbol)?).await?;
        parse_ticker(&body)
    }
}

fn parse_ticker(body: &str) -> Result<Option<f64>> {
    let resp: TickerResponse = serde_json::from_str(body)?;
    let last = resp.last.or_else(|| resp.ticker.and_then(|t| t.last));
    Ok(last.as_ref().and_then(PriceField::value))
}

#[async_trait]
impl PriceSource for WazirX {
    fn name(&self) -> &str {
        NAME
    }

    async fn fetch_price(&self, symbol: &str) -> Option<f64> {
        settle(NAME, symbol, self.try_fetch(symbol).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{local_client, serve_once};

    #[test]
    fn reads_top_level_last() {
        assert_eq!(parse_ticker(r#"{"last":"0.524"}"#).expect("valid"), Some(0.524));
    }

    #[test]
    fn reads_nested_ticker_last() {
        let raw = r#"{"at":1700000000,"ticker":{"buy":"0.52","sell":"0.53","last":"0.525"}}"#;
        assert_eq!(parse_ticker(raw).expect("valid"), Some(0.525));
    }

    #[test]
    fn body_without_last_is_none() {
        assert_eq!(parse_ticker(r#"{"message":"Not found"}"#).expect("valid"), None);
    }

    #[test]
    fn ticker_url_is_lowercase_pair() {
        let wazirx =
            WazirX::new(reqwest::Client::new(), "https://api.wazirx.com", "USDT").expect("base");
        assert_eq!(
            wazirx.ticker_url("XRP").expect("url").as_str(),
            "https://api.wazirx.com/api/v2/tickers/xrpusdt"
        );
    }

    #[tokio::test]
    async fn fetches_price_over_http() {
        let (base, request) = serve_once(200, r#"{"ticker":{"last":"612.1"}}"#).await;
        let wazirx = WazirX::new(local_client(), &base, "usdt").expect("valid base");
        assert_eq!(wazirx.fetch_price("bnb").await, Some(612.1));
        let request = request.await.expect("server task");
        assert!(request.starts_with("GET /api/v2/tickers/bnbusdt "));
    }

    #[tokio::test]
    async fn not_found_yields_no_price() {
        let (base, _request) = serve_once(404, r#"{"message":"Not found"}"#).await;
        let wazirx = WazirX::new(local_client(), &base, "usdt").expect("valid base");
        assert_eq!(wazirx.fetch_price("zzz").await, None);
    }
}
