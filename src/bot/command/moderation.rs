use crate::{
    error::AppError,
    model::permission::{Authorization, ModAction},
    service::{
        moderation::{authorize, DEFAULT_REASON},
        rate_limit::MAX_DAILY_MOD_ACTIONS,
    },
    util::parse::{parse_snowflake_user_id, parse_user_id},
};

use super::{failure_reply, mention, CommandContext};

const BAN_FIX: &str = "1. Ensure the bot has **Ban Members** permission\n2. The bot's role must be **higher** than the member's highest role";
const KICK_FIX: &str = "1. Ensure the bot has **Kick Members** permission\n2. The bot's role must be **higher** than the member's highest role";
const MUTE_FIX: &str = "1. Ensure the bot has **Manage Roles** permission\n2. The bot's role must be **higher** than the mute role in the role hierarchy";

/// Joins everything after the target into a reason.
fn reason(args: &[&str]) -> String {
    if args.len() > 1 {
        args[1..].join(" ")
    } else {
        DEFAULT_REASON.to_string()
    }
}

pub async fn ban(cmd: &CommandContext<'_>, args: &[&str]) {
    remove_member(cmd, args, ModAction::Ban).await;
}

pub async fn kick(cmd: &CommandContext<'_>, args: &[&str]) {
    remove_member(cmd, args, ModAction::Kick).await;
}

/// Shared flow for ban and kick, the two actions under the daily mod cap.
async fn remove_member(cmd: &CommandContext<'_>, args: &[&str], action: ModAction) {
    let (past, header, fix) = match action {
        ModAction::Ban => ("banned", "🔨 **Ban**", BAN_FIX),
        _ => ("kicked", "👢 **Kick**", KICK_FIX),
    };

    let Some(target) = args.first() else {
        cmd.reply(format!(
            "Usage: `{}{} <@user> [reason]`",
            cmd.prefix(),
            action
        ))
        .await;
        return;
    };

    if !cmd.authority.any() {
        tracing::info!(
            "Permission denied for {} attempting to {}",
            cmd.message.author.name,
            action
        );
        cmd.deny().await;
        return;
    }

    let Some(target_id) = parse_user_id(target) else {
        cmd.reply("❌ Invalid user mention.").await;
        return;
    };

    match authorize(&cmd.state.limiter, cmd.authority, cmd.author_id(), action).await {
        Authorization::Allowed => {}
        Authorization::Denied => {
            cmd.deny().await;
            return;
        }
        Authorization::RateLimited => {
            cmd.reply(format!(
                "❌ Daily {action} limit reached ({MAX_DAILY_MOD_ACTIONS} {action}s per day)."
            ))
            .await;
            return;
        }
    }

    let reason = reason(args);
    let service = cmd.moderation();
    let result = match action {
        ModAction::Ban => service.ban(target_id, &reason).await,
        _ => service.kick(target_id, &reason).await,
    };

    if let Err(e) = result {
        tracing::error!("Failed to {} user {}: {}", action, target_id, e);
        cmd.reply(failure_reply(&e, &format!("{} users", action), fix))
            .await;
        return;
    }

    cmd.reply(format!(
        "✅ User {} has been {}. Reason: {}",
        mention(target_id),
        past,
        reason
    ))
    .await;
    cmd.log_action(header, target_id, Some(&reason)).await;
}

pub async fn mute(cmd: &CommandContext<'_>, args: &[&str]) {
    toggle_mute(cmd, args, ModAction::Mute).await;
}

pub async fn unmute(cmd: &CommandContext<'_>, args: &[&str]) {
    toggle_mute(cmd, args, ModAction::Unmute).await;
}

async fn toggle_mute(cmd: &CommandContext<'_>, args: &[&str], action: ModAction) {
    let muting = action == ModAction::Mute;

    let Some(target) = args.first() else {
        let usage = if muting { "<@user> [reason]" } else { "<@user>" };
        cmd.reply(format!("Usage: `{}{} {}`", cmd.prefix(), action, usage))
            .await;
        return;
    };

    if authorize(&cmd.state.limiter, cmd.authority, cmd.author_id(), action).await
        != Authorization::Allowed
    {
        cmd.deny().await;
        return;
    }

    let Some(target_id) = parse_user_id(target) else {
        cmd.reply("❌ Invalid user mention.").await;
        return;
    };

    let Some(mute_role_id) = cmd.state.config.mute_role_id else {
        cmd.reply("❌ Mute role not configured.").await;
        return;
    };

    let service = cmd.moderation();
    let result = if muting {
        service.grant_role(target_id, mute_role_id).await
    } else {
        service.revoke_role(target_id, mute_role_id).await
    };

    if let Err(e) = result {
        tracing::error!("Failed to {} user {}: {}", action, target_id, e);
        cmd.reply(failure_reply(&e, &format!("{} users", action), MUTE_FIX))
            .await;
        return;
    }

    if muting {
        let reason = reason(args);
        cmd.reply(format!(
            "✅ User {} has been muted. Reason: {}",
            mention(target_id),
            reason
        ))
        .await;
        cmd.log_action("🔇 **Mute**", target_id, Some(&reason)).await;
    } else {
        cmd.reply(format!("✅ User {} has been unmuted.", mention(target_id)))
            .await;
        cmd.log_action("🔊 **Unmute**", target_id, None).await;
    }
}

/// Lifts a ban. Accepts a mention or a raw snowflake, since banned users can't be
/// picked from the member list.
pub async fn unban(cmd: &CommandContext<'_>, args: &[&str]) {
    let prefix = cmd.prefix();

    let Some(target) = args.first() else {
        cmd.reply(format!(
            "Usage: `{prefix}unban <user_id>` or `{prefix}unban @user`\n\n**Note:** You can use either the user ID or mention the user."
        ))
        .await;
        return;
    };

    if !cmd.authority.is_staff_or_above() {
        cmd.reply("❌ You don't have permission to use this command. (Admin/Staff only)")
            .await;
        return;
    }

    let Some(target_id) = parse_snowflake_user_id(target) else {
        cmd.reply(format!(
            "❌ Invalid user ID or mention. Please provide a valid user ID or mention.\n\n**Example:** `{prefix}unban 123456789012345678` or `{prefix}unban @user`"
        ))
        .await;
        return;
    };

    if let Err(e) = cmd.moderation().unban(target_id).await {
        tracing::error!("Failed to unban user {}: {}", target_id, e);

        let reply = match &e {
            AppError::NotFound(_) => format!(
                "❌ User {} is not banned or doesn't exist.",
                mention(target_id)
            ),
            _ => failure_reply(&e, "unban users", BAN_FIX),
        };
        cmd.reply(reply).await;
        return;
    }

    tracing::info!("Unbanned user {}", target_id);
    cmd.reply(format!("✅ User {} has been unbanned.", mention(target_id)))
        .await;
    cmd.log_action("✅ **Unban**", target_id, None).await;
}
