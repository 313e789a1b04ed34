//! In-memory `DiscordGateway` for tests.
//!
//! Serves roles, members and presences from plain collections and records every role
//! mutation and message so tests can assert on exactly which calls were issued.

use serenity::all::CreateMessage;
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::{
    error::AppError,
    model::{member::GuildMember, presence::PresenceSnapshot, role::GuildRole},
    service::discord::DiscordGateway,
};

/// A role mutation issued through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCall {
    Add { user_id: u64, role_id: u64 },
    Remove { user_id: u64, role_id: u64 },
}

#[derive(Default)]
pub struct RecordingGateway {
    pub roles: Vec<GuildRole>,
    pub members: Vec<GuildMember>,
    pub cached: Vec<GuildMember>,
    pub presences: HashMap<u64, PresenceSnapshot>,
    /// Users whose role mutations fail with `Forbidden`.
    pub forbidden_users: HashSet<u64>,
    pub fail_roles: bool,
    pub fail_members: bool,
    pub fail_messages: bool,
    calls: Mutex<Vec<RoleCall>>,
    messages: Mutex<Vec<u64>>,
}

impl RecordingGateway {
    pub fn new(roles: Vec<GuildRole>) -> Self {
        Self {
            roles,
            ..Default::default()
        }
    }

    pub fn with_member(mut self, member: GuildMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_presence(mut self, user_id: u64, presence: PresenceSnapshot) -> Self {
        self.presences.insert(user_id, presence);
        self
    }

    pub fn role_calls(&self) -> Vec<RoleCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Channel IDs messages were sent to, in order.
    pub fn sent_messages(&self) -> Vec<u64> {
        self.messages.lock().unwrap().clone()
    }

    fn mutate(&self, user_id: u64, call: RoleCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);

        if self.forbidden_users.contains(&user_id) {
            return Err(AppError::Forbidden("Missing Permissions".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl DiscordGateway for RecordingGateway {
    async fn guild_roles(&self, _guild_id: u64) -> Result<Vec<GuildRole>, AppError> {
        if self.fail_roles {
            return Err(AppError::NotFound("Unknown Guild".to_string()));
        }

        Ok(self.roles.clone())
    }

    async fn member(&self, _guild_id: u64, user_id: u64) -> Result<GuildMember, AppError> {
        self.members
            .iter()
            .find(|member| member.user_id == user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Unknown Member".to_string()))
    }

    async fn members(&self, _guild_id: u64, limit: u64) -> Result<Vec<GuildMember>, AppError> {
        if self.fail_members {
            return Err(AppError::Forbidden("Missing Access".to_string()));
        }

        Ok(self.members.iter().take(limit as usize).cloned().collect())
    }

    fn cached_members(&self, _guild_id: u64) -> Vec<GuildMember> {
        self.cached.clone()
    }

    fn cached_presence(&self, _guild_id: u64, user_id: u64) -> Option<PresenceSnapshot> {
        self.presences.get(&user_id).cloned()
    }

    async fn add_role(&self, _guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.mutate(user_id, RoleCall::Add { user_id, role_id })
    }

    async fn remove_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.mutate(user_id, RoleCall::Remove { user_id, role_id })
    }

    async fn send_message(
        &self,
        channel_id: u64,
        _message: CreateMessage,
    ) -> Result<(), AppError> {
        self.messages.lock().unwrap().push(channel_id);

        if self.fail_messages {
            return Err(AppError::Forbidden("Missing Access".to_string()));
        }

        Ok(())
    }
}
