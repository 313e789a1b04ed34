use serenity::all::{Context, Presence};

use crate::{
    model::presence::PresenceUpdate,
    service::{discord::SerenityGateway, vanity::VanityService},
    state::BotState,
};

/// Runs incremental vanity reconciliation for a presence update.
pub async fn handle_presence_update(state: &BotState, ctx: Context, presence: Presence) {
    let config = &state.config;
    if !config.vanity.enabled {
        return;
    }

    let update = PresenceUpdate::from(&presence);
    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());

    let outcome = VanityService::new(
        &gateway,
        &config.vanity,
        config.guild_id,
        config.log_channel_id,
    )
    .reconcile_presence(&state.cooldowns, &update)
    .await;

    tracing::trace!(
        "Vanity: presence update for {:?} -> {:?}",
        update.user_id,
        outcome
    );
}
