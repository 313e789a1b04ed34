use serenity::all::{CreateEmbed, CreateMessage, Timestamp};

use crate::{config::Config, model::permission::Authority};

use super::CommandContext;

/// Discord blurple.
const HELP_COLOR: u32 = 0x5865F2;

/// `help|commands`: posts the command overview, falling back to plain text.
pub async fn help(cmd: &CommandContext<'_>) {
    let config = &cmd.state.config;
    let embed = build_help_embed(config, cmd.authority).timestamp(Timestamp::now());

    let result = cmd
        .message
        .channel_id
        .send_message(&cmd.ctx.http, CreateMessage::new().embed(embed))
        .await;

    if let Err(e) = result {
        tracing::error!("Failed to send help embed: {}", e);
        cmd.reply(plain_help(&config.prefix)).await;
    }
}

/// Builds the help embed. Role management entries are only listed for admin/staff.
pub fn build_help_embed(config: &Config, authority: Authority) -> CreateEmbed {
    let p = config.prefix.as_str();

    let mut embed = CreateEmbed::new()
        .title("🤖 Bot Commands Help")
        .description(format!("Prefix: `{p}`\n\nUse `{p}help` to view this menu."))
        .color(HELP_COLOR)
        .field(
            "📋 Moderation Commands",
            format!("Available commands for {}", authority.label()),
            false,
        )
        .field(
            "🔨 Ban",
            format!("`{p}ban @user [reason]`\n**Permission:** Admin/Staff (unlimited) | Mod (10/day)\n**Description:** Permanently bans a user from the server"),
            false,
        )
        .field(
            "👢 Kick",
            format!("`{p}kick @user [reason]`\n**Permission:** Admin/Staff (unlimited) | Mod (10/day)\n**Description:** Removes a user from the server"),
            false,
        )
        .field(
            "🔇 Mute",
            format!("`{p}mute @user [reason]`\n**Permission:** Admin/Mod/Staff\n**Description:** Mutes a user (prevents sending messages)"),
            false,
        )
        .field(
            "✅ Unban",
            format!("`{p}unban <user_id>` or `{p}unban @user`\n**Permission:** Admin/Staff only\n**Description:** Removes a ban from a user"),
            false,
        )
        .field(
            "🔊 Unmute",
            format!("`{p}unmute @user`\n**Permission:** Admin/Mod/Staff\n**Description:** Removes mute from a user"),
            false,
        );

    if authority.is_staff_or_above() {
        embed = embed
            .field(
                "👤 Mod Role",
                format!("`{p}mod add @user`\n`{p}mod remove @user`\n**Permission:** Admin/Staff\n**Description:** Add or remove moderator role"),
                false,
            )
            .field(
                "👥 Staff Role",
                format!("`{p}staffs add @user`\n`{p}staffs remove @user`\n**Permission:** Admin/Staff\n**Description:** Add or remove staff role"),
                false,
            )
            .field(
                "⭐ Vanity Role",
                format!("`{p}vanity add @user`\n`{p}vanity remove @user`\n`{p}vanity check @user`\n**Permission:** Admin/Staff\n**Description:** Manually manage vanity roles"),
                false,
            );
    }

    embed = embed
        .field("👤 User Commands", "Commands available to all users", false)
        .field(
            "📝 Nickname",
            format!("`{p}nick <new nickname>`\n`{p}nickname <new nickname>`\n**Permission:** All users (requires 'Change Nickname' permission or Admin/Mod/Staff role)\n**Description:** Change your own nickname\n**Restrictions:** 1-32 characters, cannot contain @ or #"),
            false,
        );

    if let Some(channel_id) = config.auto_nick_channel_id {
        embed = embed.field(
            "💬 Auto-Nickname Channel",
            format!("Send a message in <#{channel_id}> to automatically change your nickname!\n**Note:** Attachments and links are not supported."),
            false,
        );
    }

    if config.vanity.enabled {
        embed = embed.field(
            "✨ Vanity Auto-System",
            format!(
                "The bot automatically assigns vanity roles based on your custom status!\n**String:** `{}`\n**Cooldown:** {} seconds",
                config.vanity.search,
                config.vanity.cooldown.as_secs()
            ),
            false,
        );
    }

    embed
}

/// Text-only help for channels where embeds can't be sent.
pub fn plain_help(p: &str) -> String {
    format!(
        "**Bot Commands Help**\n\nPrefix: `{p}`\n\n**Moderation:**\n`{p}ban @user [reason]` - Ban a user\n`{p}kick @user [reason]` - Kick a user\n`{p}mute @user [reason]` - Mute a user\n`{p}unban <user_id>` - Unban a user\n`{p}unmute @user` - Unmute a user\n\n**User Commands:**\n`{p}nick <nickname>` - Change your nickname\n\nUse `{p}help` for more information."
    )
}
