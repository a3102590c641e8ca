//! Alert delivery for detected opportunities.

use crate::arbitrage::ArbitrageOpportunity;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::utils::round_to;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod telegram;

pub use telegram::TelegramNotifier;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, opportunity: &ArbitrageOpportunity) -> Result<()>;
}

/// Markdown alert text for one opportunity.
pub fn format_opportunity(opp: &ArbitrageOpportunity, quote_asset: &str) -> String {
    format!(
        "📊 *Arbitrage Opportunity Detected!*\n\
         Coin: *{}*\n\
         Buy on: *{}* at `{}`\n\
         Sell on: *{}* at `{}`\n\
         💰 Profit: `{} {}` (~{}%)",
        opp.symbol.to_uppercase(),
        opp.buy_exchange,
        opp.buy_price,
        opp.sell_exchange,
        opp.sell_price,
        round_to(opp.profit, 4),
        quote_asset.to_uppercase(),
        round_to(opp.percent_diff, 2),
    )
}

/// Writes alerts to the log instead of a chat.
pub struct LogNotifier {
    quote_asset: String,
}

impl LogNotifier {
    pub fn new(quote_asset: &str) -> Self {
        Self {
            quote_asset: quote_asset.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, opportunity: &ArbitrageOpportunity) -> Result<()> {
        let message = format_opportunity(opportunity, &self.quote_asset);
        info!(%message, "[NOTIFY] alert (log only)");
        Ok(())
    }
}

/// Telegram when both credentials are configured, the log otherwise.
pub fn from_config(config: &AppConfig, client: reqwest::Client) -> Result<Arc<dyn Notifier>> {
    match config.telegram_credentials() {
        Some((token, chat_id)) => Ok(Arc::new(TelegramNotifier::new(
            client,
            &config.telegram_api_url,
            token,
            chat_id,
            &config.quote_asset,
        )?)),
        None => {
            warn!("[INIT] BOT_TOKEN or CHAT_ID missing, alerts go to the log only");
            Ok(Arc::new(LogNotifier::new(&config.quote_asset)))
        }
    }
}
