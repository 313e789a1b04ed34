//! Ready event handler for bot initialization.
//!
//! Logs the effective configuration and, on the first `ready` only, spawns the vanity
//! sweep. Later `ready` events (gateway reconnects) skip the sweep.

use serenity::all::{Context, Ready};
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::{
    service::{
        discord::SerenityGateway,
        vanity::{log_abort, VanityService},
    },
    state::BotState,
};

/// Gives the gateway time to populate the member and presence caches before sweeping.
const SWEEP_START_DELAY: Duration = Duration::from_secs(3);

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    let config = &state.config;

    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!(
        "Guild: {}, prefix: '{}', log channel: {:?}, auto-nick channel: {:?}",
        config.guild_id,
        config.prefix,
        config.log_channel_id,
        config.auto_nick_channel_id
    );
    tracing::info!(
        "Vanity auto-assignment: {} (role id: {:?}, role name: {:?}, cooldown: {}s)",
        if config.vanity.enabled { "enabled" } else { "disabled" },
        config.vanity.role_id,
        config.vanity.role_name,
        config.vanity.cooldown.as_secs()
    );

    if !config.vanity.enabled {
        return;
    }

    if state.sweep_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Vanity sweep already ran, skipping after reconnect");
        return;
    }

    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());
    let config = config.clone();

    tokio::spawn(async move {
        tokio::time::sleep(SWEEP_START_DELAY).await;

        let service = VanityService::new(
            &gateway,
            &config.vanity,
            config.guild_id,
            config.log_channel_id,
        );

        if let Err(e) = service.sweep_members().await {
            log_abort("sweep", &e);
        }
    });
}
