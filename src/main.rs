mod api_client;
mod bot;
mod composer;
mod config;
mod error;
mod handlers;
mod regions;
mod sender;
mod utils;

use anyhow::Result;
use config::Config;
use teloxide::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting COVID-19 India bot...");
    info!("Stats feed: {}", config.stats_url);

    let bot = Bot::new(&config.telegram_token);

    bot::start_bot(bot, config).await?;

    Ok(())
}
