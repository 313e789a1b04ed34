//! Vanity reconciliation outcomes.

use std::fmt;

/// The corrective action a reconciliation decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VanityDecision {
    Add,
    Remove,
    Keep,
}

impl VanityDecision {
    /// Minimal correction bringing role membership in line with the predicate.
    pub fn decide(has_vanity: bool, has_role: bool) -> Self {
        match (has_vanity, has_role) {
            (true, false) => Self::Add,
            (false, true) => Self::Remove,
            _ => Self::Keep,
        }
    }
}

/// What an incremental reconciliation ended up doing.
///
/// Returned so callers and tests can observe the path taken. None of these are errors
/// from the event handler's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Feature disabled, wrong guild, or the event is missing a user or guild.
    Discarded,
    OnCooldown,
    /// Vanity role missing or unsafe.
    RoleUnavailable,
    /// No custom status on the presence; existing role state is left alone.
    NoStatus,
    /// The member could not be fetched to read current roles.
    MemberUnavailable,
    Added,
    Removed,
    Unchanged,
    /// The add or remove call was rejected by Discord.
    Failed,
}

/// Counters accumulated by the startup sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Members with a non-empty custom status.
    pub checked: usize,
    pub added: usize,
    pub removed: usize,
    /// Members with no custom status and no vanity role.
    pub skipped: usize,
    /// Role mutations Discord rejected.
    pub failed: usize,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checked: {}, added: {}, removed: {}, skipped (no status): {}, failed: {}",
            self.checked, self.added, self.removed, self.skipped, self.failed
        )
    }
}
