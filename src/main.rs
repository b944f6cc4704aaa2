//! Coinsage advisor binary.
//!
//! One shot: fetch history, compute indicators, classify the latest
//! observation, print the report.

use coinsage::config::Config;
use coinsage::services::{CoinGeckoProvider, MarketDataProvider};
use coinsage::{indicators, logging, report, signals};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = coinsage::config::get_environment();
    info!(environment = %env, "starting coinsage advisor");

    let config = Config::from_env()?;
    let provider = CoinGeckoProvider::new(&config.coin_id, &config.vs_currency);

    let series = provider.daily_closes(config.days).await?;
    info!(
        points = series.len(),
        coin = %config.coin_id,
        "fetched price history"
    );

    let annotated = indicators::compute(&series);
    let observation = annotated.observation(config.reference_price);
    let signal = signals::classify(&observation, &config.rules);
    info!(signal = %signal.kind, "classified latest observation");

    println!(
        "{}",
        report::render(&observation, &signal, config.divergence_warn_pct)
    );
    Ok(())
}
