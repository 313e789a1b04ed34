//! Per-user cooldown for incremental vanity reconciliation.
//!
//! Collapses bursts of presence updates (status flicker) into a single reconciliation.
//! Only the presence-update path consults the tracker; the startup sweep paces itself
//! with a fixed delay instead. Entries are never deleted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Tracks the last reconciliation instant per user.
///
/// Cheap to clone, clones share the same map.
#[derive(Clone)]
pub struct CooldownTracker {
    duration: Duration,
    last_seen: Arc<RwLock<HashMap<u64, Instant>>>,
}

impl CooldownTracker {
    /// Creates a tracker with the given cooldown. `Duration::ZERO` disables the gate.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_seen: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns true iff `update_cooldown` was called for the user less than the
    /// configured duration ago. Always false when the duration is zero.
    pub async fn is_on_cooldown(&self, user_id: u64) -> bool {
        if self.duration.is_zero() {
            return false;
        }

        let last_seen = self.last_seen.read().await;
        last_seen
            .get(&user_id)
            .is_some_and(|at| at.elapsed() < self.duration)
    }

    /// Marks the user as reconciled now.
    pub async fn update_cooldown(&self, user_id: u64) {
        self.last_seen.write().await.insert(user_id, Instant::now());
    }

    /// Whether the user has ever been marked.
    #[cfg(test)]
    pub async fn has_entry(&self, user_id: u64) -> bool {
        self.last_seen.read().await.contains_key(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    /// Tests the cooldown window with paused time.
    ///
    /// Expected: on cooldown immediately after update, off once the duration elapses
    #[tokio::test(start_paused = true)]
    async fn expires_after_duration() {
        let tracker = CooldownTracker::new(Duration::from_secs(30));

        tracker.update_cooldown(7).await;
        assert!(tracker.is_on_cooldown(7).await);

        advance(Duration::from_secs(29)).await;
        assert!(tracker.is_on_cooldown(7).await);

        advance(Duration::from_secs(2)).await;
        assert!(!tracker.is_on_cooldown(7).await);
    }

    /// Tests that a user never updated is not on cooldown.
    ///
    /// Expected: false for an unknown user
    #[tokio::test(start_paused = true)]
    async fn unknown_user_not_on_cooldown() {
        let tracker = CooldownTracker::new(Duration::from_secs(30));

        tracker.update_cooldown(7).await;

        assert!(!tracker.is_on_cooldown(8).await);
    }

    /// Tests that a zero duration disables the gate.
    ///
    /// Expected: never on cooldown, even right after an update
    #[tokio::test(start_paused = true)]
    async fn zero_duration_disables_gate() {
        let tracker = CooldownTracker::new(Duration::ZERO);

        tracker.update_cooldown(7).await;

        assert!(!tracker.is_on_cooldown(7).await);
        assert!(tracker.has_entry(7).await);
    }
}
