//! # Play Time Bot Main Entry Point
//!
//! Initializes logging, loads configuration, connects to the game
//! statistics database, starts the cache sweeper, and runs the Telegram
//! bot dispatcher.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playtime_bot::bot::handlers::BotHandler;
use playtime_bot::config::Config;
use playtime_bot::database::connection::DatabaseManager;
use playtime_bot::services::session_cache::SessionCache;
use playtime_bot::services::sweeper::SweeperService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playtime_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Play Time Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}:{}/{}",
        config.database.host, config.database.port, config.database.database
    );

    // Initialize database pool
    let db = DatabaseManager::new(&config.database).await?;
    info!("Database pool initialized");

    // Initialize bot and shared session cache
    let bot = Bot::new(&config.telegram_bot_token);
    let cache = SessionCache::new();
    let handler = BotHandler::new(db, cache.clone());
    info!("Telegram bot initialized");

    // Start the periodic cache sweeper
    let mut sweeper = match SweeperService::new(cache).await {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to create cache sweeper: {}", e);
            return Err(anyhow::anyhow!("Failed to create cache sweeper: {}", e));
        }
    };

    if let Err(e) = sweeper.start().await {
        tracing::error!("Failed to start cache sweeper: {}", e);
    }

    info!("Starting Telegram dispatcher");
    Dispatcher::builder(bot, handler.schema())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Stop the sweeper on shutdown
    if let Err(e) = sweeper.stop().await {
        tracing::warn!("Error stopping cache sweeper: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
