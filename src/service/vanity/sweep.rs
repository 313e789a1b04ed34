//! Startup sweep over every guild member.

use std::time::Duration;

use crate::{
    error::AppError,
    model::vanity::{SweepReport, VanityDecision},
    service::discord::DiscordGateway,
};

use super::{
    status::{extract_custom_status, has_vanity},
    VanityService,
};

/// Members requested per sweep. Guilds larger than this are only partially swept.
pub const SWEEP_MEMBER_LIMIT: u64 = 1000;

/// Pause after every role mutation so the sweep stays clear of rate limits.
pub const SWEEP_MUTATION_DELAY: Duration = Duration::from_millis(50);

const PROGRESS_INTERVAL: usize = 100;

impl<G: DiscordGateway + ?Sized> VanityService<'_, G> {
    /// Reconciles every member once, reading statuses from the presence cache.
    ///
    /// Unlike the incremental path, an empty status counts as "no vanity": a member
    /// holding the role with no custom status loses it. Members with no status and no
    /// role are skipped. Fetching falls back to cached members if the API call fails.
    ///
    /// # Returns
    /// - `Ok(SweepReport)` - Counters for the completed sweep
    /// - `Err(AppError)` - Role unresolved or unsafe, or no members could be read
    pub async fn sweep_members(&self) -> Result<SweepReport, AppError> {
        let role = self.resolve_role().await?;

        let members = match self.gateway.members(self.guild_id, SWEEP_MEMBER_LIMIT).await {
            Ok(members) => members,
            Err(e) => {
                let cached = self.gateway.cached_members(self.guild_id);
                if cached.is_empty() {
                    return Err(e);
                }

                tracing::warn!(
                    "Vanity sweep: failed to fetch members ({}), using {} cached members",
                    e,
                    cached.len()
                );
                cached
            }
        };

        let mut report = SweepReport::default();
        if members.is_empty() {
            tracing::info!("Vanity sweep: no members to check");
            return Ok(report);
        }

        if members.len() as u64 == SWEEP_MEMBER_LIMIT {
            tracing::warn!(
                "Vanity sweep: fetched {} members, guild may be larger and only partially swept",
                SWEEP_MEMBER_LIMIT
            );
        }

        tracing::info!(
            "Vanity sweep: checking {} members for role {}",
            members.len(),
            role.name
        );

        let total = members.len();
        for (index, member) in members.iter().enumerate() {
            let has_role = member.has_role(role.role_id);
            let presence = self.gateway.cached_presence(self.guild_id, member.user_id);
            let status = extract_custom_status(presence.as_ref());

            let decision = if status.is_empty() {
                if !has_role {
                    report.skipped += 1;
                }
                VanityDecision::decide(false, has_role)
            } else {
                report.checked += 1;
                VanityDecision::decide(has_vanity(&status, &self.config.search), has_role)
            };

            match decision {
                VanityDecision::Add => {
                    match self
                        .gateway
                        .add_role(self.guild_id, member.user_id, role.role_id)
                        .await
                    {
                        Ok(()) => {
                            report.added += 1;
                            tracing::info!(
                                "Vanity sweep: added role to {} ({})",
                                member.username,
                                member.user_id
                            );
                        }
                        Err(e) => {
                            report.failed += 1;
                            tracing::error!(
                                "Vanity sweep: failed to add role to {} ({}): {}",
                                member.username,
                                member.user_id,
                                e
                            );
                        }
                    }
                    tokio::time::sleep(SWEEP_MUTATION_DELAY).await;
                }
                VanityDecision::Remove => {
                    match self
                        .gateway
                        .remove_role(self.guild_id, member.user_id, role.role_id)
                        .await
                    {
                        Ok(()) => {
                            report.removed += 1;
                            tracing::info!(
                                "Vanity sweep: removed role from {} ({})",
                                member.username,
                                member.user_id
                            );
                        }
                        Err(e) => {
                            report.failed += 1;
                            tracing::error!(
                                "Vanity sweep: failed to remove role from {} ({}): {}",
                                member.username,
                                member.user_id,
                                e
                            );
                        }
                    }
                    tokio::time::sleep(SWEEP_MUTATION_DELAY).await;
                }
                VanityDecision::Keep => {}
            }

            if (index + 1) % PROGRESS_INTERVAL == 0 {
                tracing::info!("Vanity sweep: progress {}/{}", index + 1, total);
            }
        }

        tracing::info!("Vanity sweep complete: {}", report);

        Ok(report)
    }
}
