use serenity::all::{Context, Message};

use crate::{
    bot::command::{self, nickname, Invocation},
    state::BotState,
};

/// Routes a guild message to the auto-nick flow or the command dispatcher.
///
/// Bot authors and messages outside the configured guild are ignored. Messages in the
/// auto-nick channel are never treated as commands.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let config = &state.config;
    if message.guild_id.map(|id| id.get()) != Some(config.guild_id) {
        return;
    }

    if config.auto_nick_channel_id == Some(message.channel_id.get()) {
        nickname::handle_auto_nick(state, &ctx, &message).await;
        return;
    }

    let Some(invocation) = Invocation::parse(&message.content, &config.prefix) else {
        return;
    };

    command::dispatch(state, &ctx, &message, invocation).await;
}
