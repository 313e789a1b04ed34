//! Prefix command parsing and dispatch.
//!
//! A command is a guild message starting with the configured prefix. The first word
//! selects the command (case-insensitively), the remaining whitespace-separated words
//! are its arguments. Unknown commands are ignored silently.

pub mod help;
pub mod moderation;
pub mod nickname;
pub mod roles;
pub mod vanity;

use serenity::all::{Context, GuildId, Message, UserId};

use crate::{
    error::AppError,
    model::permission::Authority,
    service::{mod_log::ModLogService, moderation::ModerationService},
    state::BotState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ban,
    Kick,
    Mute,
    Unmute,
    Unban,
    Mod,
    Staffs,
    Vanity,
    Nick,
    Help,
}

impl Command {
    /// Maps a lowercased command word to a command, including aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "ban" => Self::Ban,
            "kick" => Self::Kick,
            "mute" => Self::Mute,
            "unmute" => Self::Unmute,
            "unban" => Self::Unban,
            "mod" => Self::Mod,
            "staffs" => Self::Staffs,
            "vanity" => Self::Vanity,
            "nick" | "nickname" => Self::Nick,
            "help" | "commands" => Self::Help,
            _ => return None,
        };

        Some(command)
    }
}

/// A parsed command with its arguments, borrowed from the message content.
#[derive(Debug, PartialEq)]
pub struct Invocation<'a> {
    pub command: Command,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Parses message content into a command invocation.
    ///
    /// # Returns
    /// - `Some(Invocation)` - Content starts with the prefix followed by a known command
    /// - `None` - Not a command, or an unknown one
    pub fn parse(content: &'a str, prefix: &str) -> Option<Self> {
        let rest = content.strip_prefix(prefix)?;
        let mut words = rest.split_whitespace();

        let command = Command::from_name(&words.next()?.to_lowercase())?;

        Some(Self {
            command,
            args: words.collect(),
        })
    }
}

/// Everything a command handler needs about the message that triggered it.
pub struct CommandContext<'a> {
    pub ctx: &'a Context,
    pub message: &'a Message,
    pub state: &'a BotState,
    /// Role IDs held by the author.
    pub author_roles: Vec<u64>,
    pub authority: Authority,
}

impl<'a> CommandContext<'a> {
    /// Builds the context, reading the author's roles from the message or, failing
    /// that, from the API. An author whose roles can't be read has no authority.
    pub async fn new(ctx: &'a Context, message: &'a Message, state: &'a BotState) -> Self {
        let author_roles = match &message.member {
            Some(member) => member.roles.iter().map(|id| id.get()).collect(),
            None => match ctx
                .http
                .get_member(GuildId::new(state.config.guild_id), message.author.id)
                .await
            {
                Ok(member) => member.roles.iter().map(|id| id.get()).collect(),
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch roles for command author {}: {}",
                        message.author.id,
                        e
                    );
                    Vec::new()
                }
            },
        };
        let authority = state.permissions.authority(&author_roles);

        Self {
            ctx,
            message,
            state,
            author_roles,
            authority,
        }
    }

    pub fn author_id(&self) -> u64 {
        self.message.author.id.get()
    }

    pub fn prefix(&self) -> &str {
        &self.state.config.prefix
    }

    /// Replies in the channel the command came from. Failures are only logged.
    pub async fn reply(&self, content: impl Into<String>) {
        if let Err(e) = self.message.channel_id.say(&self.ctx.http, content).await {
            tracing::error!(
                "Failed to reply in channel {}: {}",
                self.message.channel_id,
                e
            );
        }
    }

    pub async fn deny(&self) {
        self.reply("❌ You don't have permission to use this command.")
            .await;
    }

    pub fn moderation(&self) -> ModerationService<'_> {
        ModerationService::new(&self.ctx.http, self.state.config.guild_id)
    }

    pub async fn log_action(&self, action: &str, target_id: u64, reason: Option<&str>) {
        ModLogService::new(&self.ctx.http, self.state.config.log_channel_id)
            .log_action(action, self.author_id(), target_id, reason)
            .await;
    }
}

/// Runs a parsed command. Every failure is absorbed and answered with a reply.
pub async fn dispatch(state: &BotState, ctx: &Context, message: &Message, invocation: Invocation<'_>) {
    tracing::debug!(
        "Command {:?} from {} ({}) with args {:?}",
        invocation.command,
        message.author.name,
        message.author.id,
        invocation.args
    );

    let cmd = CommandContext::new(ctx, message, state).await;
    let args = invocation.args.as_slice();

    match invocation.command {
        Command::Ban => moderation::ban(&cmd, args).await,
        Command::Kick => moderation::kick(&cmd, args).await,
        Command::Mute => moderation::mute(&cmd, args).await,
        Command::Unmute => moderation::unmute(&cmd, args).await,
        Command::Unban => moderation::unban(&cmd, args).await,
        Command::Mod => roles::manage(&cmd, args, &roles::MOD_ROLE).await,
        Command::Staffs => roles::manage(&cmd, args, &roles::STAFF_ROLE).await,
        Command::Vanity => vanity::vanity(&cmd, args).await,
        Command::Nick => nickname::nick(&cmd, args).await,
        Command::Help => help::help(&cmd).await,
    }
}

/// Maps a failed Discord call to a reply for the moderator.
///
/// # Arguments
/// - `err` - The failure
/// - `action` - What was attempted, e.g. "ban users"
/// - `fix` - Numbered steps shown when the bot lacks permission
pub fn failure_reply(err: &AppError, action: &str, fix: &str) -> String {
    match err {
        AppError::Forbidden(_) => format!(
            "❌ Bot doesn't have permission to {}.\n\n**Fix:**\n{}",
            action, fix
        ),
        AppError::NotFound(_) => "❌ User or guild not found. Please try again.".to_string(),
        _ => format!("❌ Failed to {}: {}", action, err),
    }
}

/// Mention of a user by ID.
pub fn mention(user_id: u64) -> String {
    format!("<@{}>", UserId::new(user_id))
}
