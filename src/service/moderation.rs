//! Moderation actions and their authorization gate.

use serenity::all::{GuildId, RoleId, UserId};
use serenity::http::Http;

use crate::{
    error::AppError,
    model::permission::{Authority, Authorization, ModAction},
    service::rate_limit::ModActionLimiter,
};

/// Default audit reason when the moderator gives none.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Decides whether an actor may perform a moderation action right now.
///
/// Actors without any tier are denied. Mod-only actors consume one unit of their daily
/// ban/kick allowance here, before the action is attempted, so a request Discord later
/// rejects still counts.
///
/// # Arguments
/// - `limiter` - Shared daily counters
/// - `authority` - The actor's evaluated permission tiers
/// - `user_id` - The actor's Discord user ID
/// - `action` - Requested action
pub async fn authorize(
    limiter: &ModActionLimiter,
    authority: Authority,
    user_id: u64,
    action: ModAction,
) -> Authorization {
    if !authority.any() {
        return Authorization::Denied;
    }

    if authority.is_rate_limited() {
        if !limiter.can_perform(user_id, action).await {
            return Authorization::RateLimited;
        }
        limiter.record(user_id, action).await;
    }

    Authorization::Allowed
}

pub struct ModerationService<'a> {
    http: &'a Http,
    guild_id: GuildId,
}

impl<'a> ModerationService<'a> {
    pub fn new(http: &'a Http, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }

    /// Bans a user without deleting their message history.
    pub async fn ban(&self, user_id: u64, reason: &str) -> Result<(), AppError> {
        self.http
            .ban_user(self.guild_id, UserId::new(user_id), 0, Some(reason))
            .await?;

        Ok(())
    }

    pub async fn kick(&self, user_id: u64, reason: &str) -> Result<(), AppError> {
        self.http
            .kick_member(self.guild_id, UserId::new(user_id), Some(reason))
            .await?;

        Ok(())
    }

    /// Lifts a ban. Returns `AppError::NotFound` if the user isn't banned.
    pub async fn unban(&self, user_id: u64) -> Result<(), AppError> {
        self.http
            .remove_ban(self.guild_id, UserId::new(user_id), None)
            .await?;

        Ok(())
    }

    pub async fn grant_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(self.guild_id, UserId::new(user_id), RoleId::new(role_id), None)
            .await?;

        Ok(())
    }

    pub async fn revoke_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .remove_member_role(self.guild_id, UserId::new(user_id), RoleId::new(role_id), None)
            .await?;

        Ok(())
    }
}
