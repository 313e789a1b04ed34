//! Vanity role reconciliation.
//!
//! Keeps the vanity role in line with each member's custom status. Two paths share the
//! same predicate and role resolution:
//!
//! - Incremental: one member per presence update, throttled by a per-user cooldown
//! - Sweep: every member once after connecting, paced by a fixed delay between
//!   mutations (see [`sweep`])
//!
//! The paths differ on an empty status. Incremental reconciliation leaves role state
//! alone because a presence with no custom activity is common during reconnects. The
//! sweep treats an empty status as authoritative and strips the role.

pub mod role;
pub mod status;
pub mod sweep;

use serenity::all::{CreateEmbed, CreateMessage};

use crate::{
    config::VanityConfig,
    error::{vanity::VanityError, AppError},
    model::{
        member::GuildMember,
        presence::PresenceUpdate,
        role::GuildRole,
        vanity::{ReconcileOutcome, VanityDecision},
    },
    service::{cooldown::CooldownTracker, discord::DiscordGateway},
};

use self::status::{extract_custom_status, has_vanity};

/// Embed color for the supporter thank-you notice.
const NOTICE_COLOR: u32 = 0xFFC0CB;

pub struct VanityService<'a, G: DiscordGateway + ?Sized> {
    gateway: &'a G,
    config: &'a VanityConfig,
    guild_id: u64,
    log_channel_id: Option<u64>,
}

impl<'a, G: DiscordGateway + ?Sized> VanityService<'a, G> {
    pub fn new(
        gateway: &'a G,
        config: &'a VanityConfig,
        guild_id: u64,
        log_channel_id: Option<u64>,
    ) -> Self {
        Self {
            gateway,
            config,
            guild_id,
            log_channel_id,
        }
    }

    /// Reconciles a single member after a presence update.
    ///
    /// The cooldown is refreshed as soon as the gate passes, before the role is even
    /// resolved, so a burst of updates costs at most one round of API calls per window.
    /// An update without any custom status never mutates roles.
    ///
    /// # Arguments
    /// - `cooldowns` - Per-user throttle shared across presence updates
    /// - `update` - The presence update as delivered by the gateway
    ///
    /// # Returns
    /// - The path the reconciliation took; failures are logged, never returned
    pub async fn reconcile_presence(
        &self,
        cooldowns: &CooldownTracker,
        update: &PresenceUpdate,
    ) -> ReconcileOutcome {
        if !self.config.enabled {
            return ReconcileOutcome::Discarded;
        }

        let (Some(guild_id), Some(user_id)) = (update.guild_id, update.user_id) else {
            tracing::debug!("Ignoring presence update without guild or user");
            return ReconcileOutcome::Discarded;
        };

        if guild_id != self.guild_id {
            return ReconcileOutcome::Discarded;
        }

        if cooldowns.is_on_cooldown(user_id).await {
            tracing::debug!("Vanity: user {} is on cooldown", user_id);
            return ReconcileOutcome::OnCooldown;
        }
        cooldowns.update_cooldown(user_id).await;

        let role = match self.resolve_role().await {
            Ok(role) => role,
            Err(e) => {
                log_abort("reconciliation", &e);
                return ReconcileOutcome::RoleUnavailable;
            }
        };

        let status = extract_custom_status(Some(&update.presence));
        if status.is_empty() {
            return ReconcileOutcome::NoStatus;
        }

        let member = match self.gateway.member(self.guild_id, user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::error!("Vanity: failed to fetch member {}: {}", user_id, e);
                return ReconcileOutcome::MemberUnavailable;
            }
        };

        let decision = VanityDecision::decide(
            has_vanity(&status, &self.config.search),
            member.has_role(role.role_id),
        );

        match decision {
            VanityDecision::Add => {
                if let Err(e) = self
                    .gateway
                    .add_role(self.guild_id, member.user_id, role.role_id)
                    .await
                {
                    tracing::error!(
                        "Vanity: failed to add role to {} ({}): {}",
                        member.username,
                        member.user_id,
                        e
                    );
                    return ReconcileOutcome::Failed;
                }

                tracing::info!(
                    "Vanity: added role {} to {} ({})",
                    role.name,
                    member.username,
                    member.user_id
                );
                self.notify_supporter(&member, &role).await;

                ReconcileOutcome::Added
            }
            VanityDecision::Remove => {
                if let Err(e) = self
                    .gateway
                    .remove_role(self.guild_id, member.user_id, role.role_id)
                    .await
                {
                    tracing::error!(
                        "Vanity: failed to remove role from {} ({}): {}",
                        member.username,
                        member.user_id,
                        e
                    );
                    return ReconcileOutcome::Failed;
                }

                tracing::info!(
                    "Vanity: removed role {} from {} ({})",
                    role.name,
                    member.username,
                    member.user_id
                );

                ReconcileOutcome::Removed
            }
            VanityDecision::Keep => ReconcileOutcome::Unchanged,
        }
    }

    /// Resolves the vanity role and checks it is safe to auto-assign.
    ///
    /// # Returns
    /// - `Ok(GuildRole)` - The configured role, free of dangerous permissions
    /// - `Err(AppError::VanityErr)` - Role missing or unsafe
    /// - `Err(AppError)` - Fetching guild roles failed
    pub async fn resolve_role(&self) -> Result<GuildRole, AppError> {
        let roles = self.gateway.guild_roles(self.guild_id).await?;

        let role = role::find_vanity_role(
            &roles,
            self.config.role_id,
            self.config.role_name.as_deref(),
        )?;
        role::ensure_role_safe(role)?;

        Ok(role.clone())
    }

    /// Posts the thank-you notice to the log channel. Failures are only logged.
    async fn notify_supporter(&self, member: &GuildMember, role: &GuildRole) {
        let Some(channel_id) = self.log_channel_id else {
            return;
        };

        if let Err(e) = self
            .gateway
            .send_message(channel_id, supporter_notice(member, role))
            .await
        {
            tracing::warn!(
                "Vanity: failed to post notice for {} in channel {}: {}",
                member.user_id,
                channel_id,
                e
            );
        }
    }
}

/// Builds the thank-you message: a plain mention plus a pink embed naming the role.
pub fn supporter_notice(member: &GuildMember, role: &GuildRole) -> CreateMessage {
    let embed = CreateEmbed::new()
        .description(format!(
            "🩷 {} thanks for putting our vanity in your status, keep supporting!",
            role.mention()
        ))
        .color(NOTICE_COLOR);

    CreateMessage::new()
        .content(format!("<@{}>", member.user_id))
        .embed(embed)
}

/// Logs an aborted reconciliation or sweep, flagging unsafe roles as policy violations.
pub fn log_abort(context: &str, err: &AppError) {
    match err {
        AppError::VanityErr(VanityError::UnsafeRole { .. }) => {
            tracing::error!("Vanity policy violation, {} aborted: {}", context, err);
        }
        _ => tracing::warn!("Vanity {} aborted: {}", context, err),
    }
}
