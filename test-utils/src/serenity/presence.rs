//! Test factories for creating Serenity Presence and Activity objects.

use serenity::all::{Activity, Presence};

/// Creates a test presence for a user with the given activities.
///
/// # Arguments
/// - `user_id` - User the presence belongs to
/// - `guild_id` - Guild the update was delivered for, if any
/// - `activities` - Activities in the order Discord reports them
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
pub fn create_test_presence(
    user_id: u64,
    guild_id: Option<u64>,
    activities: Vec<Activity>,
) -> Presence {
    let mut presence: Presence = serde_json::from_value(serde_json::json!({
        "user": { "id": user_id.to_string() },
        "guild_id": guild_id.map(|id| id.to_string()),
        "status": "online",
        "activities": [],
        "client_status": null,
    }))
    .expect("Failed to create test presence - invalid JSON structure");

    presence.activities = activities;
    presence
}

/// Creates a test activity.
///
/// # Arguments
/// - `kind` - Discord activity type (0 = playing, 2 = listening, 4 = custom status)
/// - `name` - Activity name
/// - `state` - Activity state, which holds the text of a custom status
///
/// # Panics
/// - If the JSON cannot be deserialized into an Activity (indicates invalid test data)
pub fn create_test_activity(kind: u8, name: &str, state: Option<&str>) -> Activity {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "type": kind,
        "state": state,
        "created_at": 0,
    }))
    .expect("Failed to create test activity - invalid JSON structure")
}
