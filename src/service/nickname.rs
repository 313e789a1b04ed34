//! Self-service nickname changes.
//!
//! Members change their own nickname either with the `nick` command or by posting the
//! desired nickname in the auto-nick channel. The channel path skips permission checks
//! but ignores anything that looks like a link or carries attachments.

use serenity::all::{EditMember, GuildId, Permissions, UserId};
use serenity::http::Http;

use crate::{
    error::{nickname::NicknameError, AppError},
    model::{permission::Authority, role::GuildRole},
};

/// Discord's nickname length limit, in characters.
pub const MAX_NICKNAME_LEN: usize = 32;

/// Substrings that mark a message as containing a link. Matched case-insensitively.
const LINK_MARKERS: [&str; 6] = [
    "http://",
    "https://",
    "www.",
    "discord.gg/",
    "discord.com/",
    "discordapp.com/",
];

/// What to do with a message posted in the auto-nick channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoNickRequest {
    Ignore,
    Reset,
    Change(String),
}

impl AutoNickRequest {
    /// Classifies an auto-nick channel message.
    ///
    /// # Arguments
    /// - `content` - Raw message content
    /// - `has_attachments` - Whether the message carries files
    /// - `has_embeds` - Whether the message carries embeds
    /// - `prefix` - Command prefix; prefixed messages are not nicknames
    pub fn classify(content: &str, has_attachments: bool, has_embeds: bool, prefix: &str) -> Self {
        if has_attachments || has_embeds {
            return Self::Ignore;
        }

        let content = content.trim();
        if content.is_empty() || content.starts_with(prefix) || contains_link(content) {
            return Self::Ignore;
        }

        if content.eq_ignore_ascii_case("reset") {
            return Self::Reset;
        }

        Self::Change(content.to_string())
    }
}

pub fn contains_link(text: &str) -> bool {
    let lower = text.to_lowercase();
    LINK_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Checks a requested nickname against Discord's limits and our character rules.
pub fn validate_nickname(nickname: &str) -> Result<(), NicknameError> {
    let len = nickname.chars().count();

    if len > MAX_NICKNAME_LEN {
        return Err(NicknameError::TooLong);
    }
    if len == 0 {
        return Err(NicknameError::Empty);
    }
    if nickname.contains('@') || nickname.contains('#') {
        return Err(NicknameError::ForbiddenCharacter);
    }

    Ok(())
}

/// Union of the permissions granted by the given roles.
///
/// The `@everyone` role shares the guild's ID and applies to every member, so it is
/// always included.
pub fn combined_permissions(guild_id: u64, member_roles: &[u64], roles: &[GuildRole]) -> Permissions {
    roles
        .iter()
        .filter(|role| role.role_id == guild_id || member_roles.contains(&role.role_id))
        .fold(Permissions::empty(), |acc, role| acc | role.permissions)
}

/// Whether a member may use the `nick` command.
///
/// Guild owners always may. Everyone else needs Change Nickname from their roles, or
/// any bot permission tier.
pub fn can_change_nickname(is_owner: bool, permissions: Permissions, authority: Authority) -> bool {
    is_owner
        || permissions.contains(Permissions::CHANGE_NICKNAME)
        || permissions.contains(Permissions::ADMINISTRATOR)
        || authority.any()
}

pub struct NicknameService<'a> {
    http: &'a Http,
    guild_id: u64,
}

impl<'a> NicknameService<'a> {
    pub fn new(http: &'a Http, guild_id: u64) -> Self {
        Self { http, guild_id }
    }

    /// Sets a member's nickname. An empty nickname resets it to the username.
    ///
    /// # Returns
    /// - `Ok(())` - Nickname updated
    /// - `Err(AppError::Forbidden)` - Bot lacks Manage Nicknames or is below the member
    /// - `Err(AppError)` - Discord rejected the request otherwise
    pub async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), AppError> {
        GuildId::new(self.guild_id)
            .edit_member(
                self.http,
                UserId::new(user_id),
                EditMember::new().nickname(nickname),
            )
            .await?;

        Ok(())
    }

    /// Checks whether the member may use the `nick` command.
    ///
    /// Fetches the guild for its owner and role permissions.
    pub async fn is_permitted(
        &self,
        user_id: u64,
        member_roles: &[u64],
        authority: Authority,
    ) -> Result<bool, AppError> {
        let guild = self.http.get_guild(GuildId::new(self.guild_id)).await?;
        let is_owner = guild.owner_id.get() == user_id;

        let roles: Vec<GuildRole> = guild.roles.values().map(GuildRole::from).collect();
        let permissions = combined_permissions(self.guild_id, member_roles, &roles);

        tracing::debug!(
            "Nickname: user {} owner: {}, permissions: {}, authority: {:?}",
            user_id,
            is_owner,
            permissions.bits(),
            authority
        );

        Ok(can_change_nickname(is_owner, permissions, authority))
    }
}
