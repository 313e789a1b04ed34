//! Bot state shared across all event handlers.
//!
//! Initialized once in `main` and handed to the Serenity event handler. Every field is
//! cheap to clone: the stores are `Arc`-backed and clones share the same data, which
//! matters because Serenity runs each event on its own task.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::{
    config::Config,
    service::{
        cooldown::CooldownTracker, permission::PermissionEvaluator,
        rate_limit::ModActionLimiter,
    },
};

#[derive(Clone)]
pub struct BotState {
    pub config: Arc<Config>,

    /// Per-user throttle for incremental vanity reconciliation.
    pub cooldowns: CooldownTracker,

    /// Daily ban/kick counters for mod-only members.
    pub limiter: ModActionLimiter,

    pub permissions: PermissionEvaluator,

    /// Set once the startup sweep has been spawned, so reconnects don't sweep again.
    pub sweep_started: Arc<AtomicBool>,
}

impl BotState {
    pub fn new(config: Config) -> Self {
        let cooldowns = CooldownTracker::new(config.vanity.cooldown);
        let permissions = PermissionEvaluator::new(
            config.admin_role_id,
            config.staff_role_id,
            config.mod_role_id,
        );

        Self {
            config: Arc::new(config),
            cooldowns,
            limiter: ModActionLimiter::new(),
            permissions,
            sweep_started: Arc::new(AtomicBool::new(false)),
        }
    }
}
