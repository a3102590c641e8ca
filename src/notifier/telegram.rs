use super::{Notifier, format_opportunity};
use crate::arbitrage::ArbitrageOpportunity;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use url::Url;

/// Telegram Bot API `sendMessage` client bound to one chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    endpoint: Url,
    chat_id: String,
    quote_asset: String,
}

impl TelegramNotifier {
    pub fn new(
        client: reqwest::Client,
        api_url: &str,
        bot_token: &str,
        chat_id: &str,
        quote_asset: &str,
    ) -> Result<Self> {
        // `./` keeps the colon in the token from being read as a URL scheme.
        let endpoint = Url::parse(api_url)?.join(&format!("./bot{bot_token}/sendMessage"))?;
        Ok(Self {
            client,
            endpoint,
            chat_id: chat_id.to_string(),
            quote_asset: quote_asset.to_string(),
        })
    }

    pub async fn send_text(&self, text: &str) -> Result<()> {
        let form = [
            ("chat_id", self.chat_id.as_str()),
            ("text", text),
            ("parse_mode", "Markdown"),
        ];
        let resp = self
            .client
            .post(self.endpoint.clone())
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Notify(format!("{status}: {body}")));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, opportunity: &ArbitrageOpportunity) -> Result<()> {
        let text = format_opportunity(opportunity, &self.quote_asset);
        self.send_text(&text).await
    }
}
