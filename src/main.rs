use anyhow::Result;
use spread_watcher::{
    aggregator::{Scanner, spawn_scanner},
    config::AppConfig,
    exchanges::Exchanges,
    notifier, utils,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;
    let client = utils::build_http_client(config.request_timeout())?;

    let exchanges = Exchanges::from_config(&config, client.clone())?;
    let notifier = notifier::from_config(&config, client)?;

    tracing::info!(
        symbols = ?config.symbols,
        exchanges = ?exchanges.names(),
        threshold_percent = config.threshold_percent,
        check_interval = config.check_interval,
        "[INIT] spread-watcher starting"
    );

    let scanner = Scanner::new(exchanges, notifier, &config);
    let mut scan_task = spawn_scanner(scanner);

    tokio::select! {
        res = &mut scan_task => {
            if let Err(e) = res {
                tracing::error!(error = %e, "scan task exited");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("[SHUTDOWN] interrupt received");
            scan_task.abort();
        }
    }
    Ok(())
}
