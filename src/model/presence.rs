//! Presence domain models.
//!
//! A presence is a transient snapshot of a member's activities. It is supplied per
//! event (or read from the gateway cache during the startup sweep) and never stored.

use serenity::all::{Activity, ActivityType, Presence};

/// Activity type tag, reduced to the variants the bot distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    /// A user-authored custom status, the only kind the vanity check reads.
    Custom,
    Competing,
    Other,
}

impl From<ActivityType> for ActivityKind {
    fn from(kind: ActivityType) -> Self {
        match kind {
            ActivityType::Playing => Self::Playing,
            ActivityType::Streaming => Self::Streaming,
            ActivityType::Listening => Self::Listening,
            ActivityType::Watching => Self::Watching,
            ActivityType::Custom => Self::Custom,
            ActivityType::Competing => Self::Competing,
            _ => Self::Other,
        }
    }
}

/// One entry of a presence's activity list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySnapshot {
    pub kind: ActivityKind,
    /// Activity name. For custom statuses Discord usually sends "Custom Status" here.
    pub name: String,
    /// Custom status text, if any.
    pub state: Option<String>,
}

impl ActivitySnapshot {
    pub fn new(kind: ActivityKind, name: impl Into<String>, state: Option<&str>) -> Self {
        Self {
            kind,
            name: name.into(),
            state: state.map(str::to_string),
        }
    }
}

impl From<&Activity> for ActivitySnapshot {
    fn from(activity: &Activity) -> Self {
        Self {
            kind: activity.kind.into(),
            name: activity.name.clone(),
            state: activity.state.clone(),
        }
    }
}

/// Point-in-time snapshot of a member's activities, in the order Discord sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenceSnapshot {
    pub activities: Vec<ActivitySnapshot>,
}

impl From<&Presence> for PresenceSnapshot {
    fn from(presence: &Presence) -> Self {
        Self {
            activities: presence.activities.iter().map(Into::into).collect(),
        }
    }
}

/// A presence update event as seen by the reconciliation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceUpdate {
    /// Guild the update was delivered for. Absent for non-guild presences.
    pub guild_id: Option<u64>,
    pub user_id: Option<u64>,
    pub presence: PresenceSnapshot,
}

impl From<&Presence> for PresenceUpdate {
    fn from(presence: &Presence) -> Self {
        Self {
            guild_id: presence.guild_id.map(|id| id.get()),
            user_id: Some(presence.user.id.get()),
            presence: presence.into(),
        }
    }
}
