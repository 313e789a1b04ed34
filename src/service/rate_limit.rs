//! Daily moderation-action limiter.
//!
//! This module provides the `ModActionLimiter` which caps how many bans and kicks a
//! mod-level member may issue per UTC calendar day. Counters live in memory only and
//! reset naturally when the date rolls over; a scheduled cleanup purges past dates.
//! Admin and staff members bypass the limiter entirely, so callers only consult it for
//! mod-only actors.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::permission::ModAction;

/// Maximum bans (and, separately, kicks) a mod may issue per UTC day.
pub const MAX_DAILY_MOD_ACTIONS: u32 = 10;

/// user ID -> UTC date -> count
type DailyCounts = HashMap<u64, HashMap<NaiveDate, u32>>;

#[derive(Default)]
struct Counters {
    bans: DailyCounts,
    kicks: DailyCounts,
}

impl Counters {
    fn for_action(&self, action: ModAction) -> Option<&DailyCounts> {
        match action {
            ModAction::Ban => Some(&self.bans),
            ModAction::Kick => Some(&self.kicks),
            _ => None,
        }
    }

    fn for_action_mut(&mut self, action: ModAction) -> Option<&mut DailyCounts> {
        match action {
            ModAction::Ban => Some(&mut self.bans),
            ModAction::Kick => Some(&mut self.kicks),
            _ => None,
        }
    }
}

/// Per-user, per-day counters for rate-limited moderation actions.
///
/// Cheap to clone, clones share the same counters.
#[derive(Clone, Default)]
pub struct ModActionLimiter {
    counters: Arc<RwLock<Counters>>,
}

impl ModActionLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the user may perform the action today.
    ///
    /// Actions other than ban and kick are always permitted.
    pub async fn can_perform(&self, user_id: u64, action: ModAction) -> bool {
        self.can_perform_on(user_id, action, today()).await
    }

    /// Records one use of the action for today.
    ///
    /// Every call increments. Call only after `can_perform` returned true.
    pub async fn record(&self, user_id: u64, action: ModAction) {
        self.record_on(user_id, action, today()).await
    }

    /// Removes every counter not dated today and drops users left with no entries.
    ///
    /// Idempotent. Not required for correctness since lookups are keyed by date.
    pub async fn cleanup(&self) {
        self.cleanup_on(today()).await
    }

    pub async fn can_perform_on(&self, user_id: u64, action: ModAction, date: NaiveDate) -> bool {
        let counters = self.counters.read().await;

        let Some(counts) = counters.for_action(action) else {
            return true;
        };

        let used = counts
            .get(&user_id)
            .and_then(|dates| dates.get(&date))
            .copied()
            .unwrap_or(0);

        used < MAX_DAILY_MOD_ACTIONS
    }

    pub async fn record_on(&self, user_id: u64, action: ModAction, date: NaiveDate) {
        let mut counters = self.counters.write().await;

        if let Some(counts) = counters.for_action_mut(action) {
            *counts.entry(user_id).or_default().entry(date).or_insert(0) += 1;
        }
    }

    pub async fn cleanup_on(&self, date: NaiveDate) {
        let mut guard = self.counters.write().await;
        let counters = &mut *guard;

        for counts in [&mut counters.bans, &mut counters.kicks] {
            counts.retain(|_, dates| {
                dates.retain(|day, _| *day == date);
                !dates.is_empty()
            });
        }
    }

    /// Number of users with at least one tracked counter for the action.
    #[cfg(test)]
    pub async fn tracked_users(&self, action: ModAction) -> usize {
        let counters = self.counters.read().await;
        counters.for_action(action).map_or(0, HashMap::len)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
