//! Role-based permission evaluation.
//!
//! Maps a member's role set to the bot's three permission tiers. Pure, no I/O: callers
//! fetch the member's roles first and pass them in.

use crate::model::permission::{Authority, PermissionLevel};

/// Evaluates admin/staff/mod checks against the configured tier role IDs.
///
/// An unset tier role never matches. Each check is independent, so a member holding
/// several tier roles is evaluated per level rather than by a single "highest role".
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionEvaluator {
    admin_role_id: Option<u64>,
    staff_role_id: Option<u64>,
    mod_role_id: Option<u64>,
}

impl PermissionEvaluator {
    pub fn new(
        admin_role_id: Option<u64>,
        staff_role_id: Option<u64>,
        mod_role_id: Option<u64>,
    ) -> Self {
        Self {
            admin_role_id,
            staff_role_id,
            mod_role_id,
        }
    }

    /// Checks whether the role set satisfies the required level.
    ///
    /// - Admin role grants every level
    /// - Staff role grants Admin and Staff checks
    /// - Mod role grants only Mod checks
    ///
    /// # Arguments
    /// - `roles` - Role IDs the member currently holds
    /// - `required` - The level being checked
    ///
    /// # Returns
    /// - `true` - The member passes the check
    /// - `false` - None of the member's roles grant the level
    pub fn evaluate(&self, roles: &[u64], required: PermissionLevel) -> bool {
        let holds = |role: Option<u64>| role.is_some_and(|id| roles.contains(&id));

        if holds(self.admin_role_id) {
            return true;
        }

        if holds(self.staff_role_id)
            && matches!(required, PermissionLevel::Admin | PermissionLevel::Staff)
        {
            return true;
        }

        holds(self.mod_role_id) && required == PermissionLevel::Mod
    }

    /// Runs all three checks for a member.
    pub fn authority(&self, roles: &[u64]) -> Authority {
        Authority {
            admin: self.evaluate(roles, PermissionLevel::Admin),
            staff: self.evaluate(roles, PermissionLevel::Staff),
            moderator: self.evaluate(roles, PermissionLevel::Mod),
        }
    }
}
