//! Configuration loader and application settings.

use crate::errors::Result;
use serde::Deserialize;
use std::time::Duration;

/// Consolidated application configuration, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Telegram bot credential. Without it alerts only go to the log.
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Destination chat for alerts.
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Base assets to watch, e.g. "xrp".
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    /// Asset every symbol is priced in.
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,
    /// Minimum spread, in percent, that counts as an opportunity.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,
    /// Seconds to sleep between scan cycles.
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_binance_api_url")]
    pub binance_api_url: String,
    #[serde(default = "default_coindcx_api_url")]
    pub coindcx_api_url: String,
    #[serde(default = "default_wazirx_api_url")]
    pub wazirx_api_url: String,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
}

fn default_symbols() -> Vec<String> {
    vec!["usdt".into(), "xrp".into(), "bnb".into()]
}

fn default_quote_asset() -> String {
    "usdt".into()
}

fn default_threshold_percent() -> f64 {
    0.2
}

fn default_check_interval() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_binance_api_url() -> String {
    "https://api.binance.com".into()
}

fn default_coindcx_api_url() -> String {
    "https://api.coindcx.com".into()
}

fn default_wazirx_api_url() -> String {
    "https://api.wazirx.com".into()
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".into()
}

impl AppConfig {
    /// Load configuration from the process environment. Call `dotenvy::dotenv()`
    /// first to pick up a `.env` file.
    pub fn load() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: AppConfig = envy::from_iter(vars)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.symbols = self
            .symbols
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self.quote_asset = self.quote_asset.trim().to_lowercase();
        self
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Telegram credentials, present only when both token and chat id are set.
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat)) if !token.is_empty() && !chat.is_empty() => {
                Some((token, chat))
            }
            _ => None,
        }
    }
}
