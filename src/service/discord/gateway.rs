use serenity::all::{ChannelId, CreateMessage, GuildId, RoleId, UserId};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::AppError,
    model::{member::GuildMember, presence::PresenceSnapshot, role::GuildRole},
};

/// Audit log reason attached to automatic vanity role changes.
const VANITY_AUDIT_REASON: &str = "Vanity status auto-assignment";

/// Discord operations used by vanity reconciliation.
///
/// Every fallible call distinguishes permission failures (`AppError::Forbidden`) and
/// missing resources (`AppError::NotFound`) from other errors.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Fetches every role of the guild.
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<GuildRole>, AppError>;

    /// Fetches a single member with their current roles.
    async fn member(&self, guild_id: u64, user_id: u64) -> Result<GuildMember, AppError>;

    /// Fetches up to `limit` members, in Discord's order.
    async fn members(&self, guild_id: u64, limit: u64) -> Result<Vec<GuildMember>, AppError>;

    /// Members currently held in the gateway cache, used when fetching fails.
    fn cached_members(&self, guild_id: u64) -> Vec<GuildMember>;

    /// The member's last known presence from the gateway cache.
    fn cached_presence(&self, guild_id: u64, user_id: u64) -> Option<PresenceSnapshot>;

    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError>;

    async fn remove_role(&self, guild_id: u64, user_id: u64, role_id: u64)
        -> Result<(), AppError>;

    async fn send_message(&self, channel_id: u64, message: CreateMessage) -> Result<(), AppError>;
}

/// `DiscordGateway` backed by Serenity's HTTP client and gateway cache.
///
/// Both handles are reference counted, so the gateway is cheap to clone into the
/// spawned startup sweep.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<GuildRole>, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        Ok(roles.iter().map(GuildRole::from).collect())
    }

    async fn member(&self, guild_id: u64, user_id: u64) -> Result<GuildMember, AppError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await?;

        Ok(GuildMember::from(&member))
    }

    async fn members(&self, guild_id: u64, limit: u64) -> Result<Vec<GuildMember>, AppError> {
        let members = self
            .http
            .get_guild_members(GuildId::new(guild_id), Some(limit), None)
            .await?;

        Ok(members.iter().map(GuildMember::from).collect())
    }

    fn cached_members(&self, guild_id: u64) -> Vec<GuildMember> {
        // GuildRef holds a cache lock, copy out before returning
        self.cache
            .guild(GuildId::new(guild_id))
            .map(|guild| guild.members.values().map(GuildMember::from).collect())
            .unwrap_or_default()
    }

    fn cached_presence(&self, guild_id: u64, user_id: u64) -> Option<PresenceSnapshot> {
        let guild = self.cache.guild(GuildId::new(guild_id))?;

        guild
            .presences
            .get(&UserId::new(user_id))
            .map(PresenceSnapshot::from)
    }

    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(VANITY_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(VANITY_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn send_message(&self, channel_id: u64, message: CreateMessage) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}
