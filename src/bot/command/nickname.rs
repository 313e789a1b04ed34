use serenity::all::{Context, Message};

use crate::{
    error::{nickname::NicknameError, DISCORD_INVALID_FORM_BODY},
    service::{
        mod_log::ModLogService,
        nickname::{validate_nickname, AutoNickRequest, NicknameService},
    },
    state::BotState,
};

use super::{failure_reply, CommandContext};

const NICK_FIX: &str = "1. Ensure the bot has **Manage Nicknames** permission\n2. The bot's role must be **higher** than the user's highest role in the role hierarchy";

/// `nick|nickname <text>`: changes the author's own nickname.
pub async fn nick(cmd: &CommandContext<'_>, args: &[&str]) {
    if args.is_empty() {
        let prefix = cmd.prefix();
        cmd.reply(format!(
            "Usage: `{prefix}nick <new nickname>`\nExample: `{prefix}nick John Doe`"
        ))
        .await;
        return;
    }

    let nickname = args.join(" ");
    if let Err(e) = validate_nickname(&nickname) {
        reply_invalid(cmd.ctx, cmd.message, &e).await;
        return;
    }

    let service = NicknameService::new(&cmd.ctx.http, cmd.state.config.guild_id);
    match service
        .is_permitted(cmd.author_id(), &cmd.author_roles, cmd.authority)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::info!(
                "Nickname: permission denied for {}",
                cmd.message.author.name
            );
            cmd.reply("❌ You don't have permission to change your nickname.\n\n**Required:** Change Nickname permission or Admin/Mod/Staff role")
                .await;
            return;
        }
        Err(e) => {
            tracing::error!("Nickname: failed to check permissions: {}", e);
            cmd.reply("❌ Error retrieving your member information.")
                .await;
            return;
        }
    }

    apply(cmd.state, cmd.ctx, cmd.message, &nickname).await;
}

/// Handles a message in the auto-nick channel. No permission check applies here.
pub async fn handle_auto_nick(state: &BotState, ctx: &Context, message: &Message) {
    let request = AutoNickRequest::classify(
        &message.content,
        !message.attachments.is_empty(),
        !message.embeds.is_empty(),
        &state.config.prefix,
    );

    match request {
        AutoNickRequest::Ignore => {
            tracing::debug!("AutoNick: ignoring message from {}", message.author.name);
        }
        AutoNickRequest::Reset => apply(state, ctx, message, "").await,
        AutoNickRequest::Change(nickname) => {
            if let Err(e) = validate_nickname(&nickname) {
                reply_invalid(ctx, message, &e).await;
                return;
            }

            apply(state, ctx, message, &nickname).await;
        }
    }
}

/// Sets the nickname, reacts on success and writes the mod log entry.
///
/// An empty nickname resets to the username.
async fn apply(state: &BotState, ctx: &Context, message: &Message, nickname: &str) {
    let author_id = message.author.id.get();
    let service = NicknameService::new(&ctx.http, state.config.guild_id);

    if let Err(e) = service.set_nickname(author_id, nickname).await {
        tracing::error!(
            "Nickname: failed to set nickname for {}: {}",
            author_id,
            e
        );

        let reply = if e.discord_code() == Some(DISCORD_INVALID_FORM_BODY) {
            "❌ Invalid nickname format. Please use only valid characters.".to_string()
        } else {
            failure_reply(&e, "change nicknames", NICK_FIX)
        };
        say(ctx, message, reply).await;
        return;
    }

    if let Err(e) = message.react(&ctx.http, '✅').await {
        tracing::warn!("Nickname: failed to react to {}: {}", message.id, e);
    }

    let (header, reason) = if nickname.is_empty() {
        tracing::info!("Nickname: reset nickname for {}", message.author.name);
        ("📝 **Nickname Reset**", "Reset to default username".to_string())
    } else {
        tracing::info!(
            "Nickname: changed nickname for {} to '{}'",
            message.author.name,
            nickname
        );
        ("📝 **Nickname Changed**", format!("New nickname: {}", nickname))
    };

    ModLogService::new(&ctx.http, state.config.log_channel_id)
        .log_action(header, author_id, author_id, Some(&reason))
        .await;
}

/// Empty nicknames are dropped silently, every other rejection gets a reply.
async fn reply_invalid(ctx: &Context, message: &Message, err: &NicknameError) {
    if *err == NicknameError::Empty {
        return;
    }

    say(ctx, message, err.to_string()).await;
}

async fn say(ctx: &Context, message: &Message, content: String) {
    if let Err(e) = message.channel_id.say(&ctx.http, content).await {
        tracing::error!("Failed to reply in channel {}: {}", message.channel_id, e);
    }
}
