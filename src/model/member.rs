//! Guild member domain model.

use serenity::all::Member;

/// A guild member as read by the reconciliation engine.
///
/// Only lives for the duration of a single reconciliation call. The platform owns the
/// member; the bot only reads it and issues role mutations back.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// Discord username, used for log output.
    pub username: String,
    /// IDs of every role the member currently holds.
    pub roles: Vec<u64>,
}

impl GuildMember {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.roles.contains(&role_id)
    }
}

impl From<&Member> for GuildMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            username: member.user.name.clone(),
            roles: member.roles.iter().map(|id| id.get()).collect(),
        }
    }
}
