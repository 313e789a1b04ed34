//! Permission levels and moderation action kinds.

use std::fmt;

/// Bot-level permission tiers, in descending authority.
///
/// Each tier is backed by a single configured role ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    Admin,
    Staff,
    Mod,
}

/// Moderation actions issued through chat commands.
///
/// Only `Ban` and `Kick` are subject to the daily mod cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModAction {
    Ban,
    Kick,
    Mute,
    Unmute,
    Unban,
}

impl fmt::Display for ModAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ban => "ban",
            Self::Kick => "kick",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Unban => "unban",
        };
        f.write_str(name)
    }
}

/// The result of evaluating all three permission levels for one member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Authority {
    pub admin: bool,
    pub staff: bool,
    pub moderator: bool,
}

impl Authority {
    /// Whether the member passes any of the three checks.
    pub fn any(&self) -> bool {
        self.admin || self.staff || self.moderator
    }

    /// Admin or staff, the tiers allowed to manage roles and unban.
    pub fn is_staff_or_above(&self) -> bool {
        self.admin || self.staff
    }

    /// Mod-only members are subject to the daily ban/kick cap.
    pub fn is_rate_limited(&self) -> bool {
        self.moderator && !self.admin && !self.staff
    }

    /// Audience label used by the help embed.
    pub fn label(&self) -> &'static str {
        if self.admin {
            "Administrators"
        } else if self.staff {
            "Staff Members"
        } else if self.moderator {
            "Moderators"
        } else {
            "Regular Users"
        }
    }
}

/// Outcome of gating a moderation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Allowed,
    Denied,
    /// Mod-level actor has used up today's allowance for this action.
    RateLimited,
}
