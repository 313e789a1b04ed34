mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{bot::start, config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;

    let state = BotState::new(config);

    let _scheduler = scheduler::rate_limit_cleanup::start_scheduler(state.limiter.clone()).await?;

    let client = start::init_bot(state).await?;
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    start::start_bot(client).await
}
