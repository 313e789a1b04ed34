//! Custom status extraction and the vanity predicate.

use crate::model::presence::{ActivityKind, PresenceSnapshot};

/// Returns the member's custom status text, lowercased, or an empty string.
///
/// Scans activities in list order and stops at the first custom status: its `state`
/// when non-empty, otherwise its `name`. Later custom activities are never consulted,
/// even if the first one carries no text.
pub fn extract_custom_status(presence: Option<&PresenceSnapshot>) -> String {
    let Some(presence) = presence else {
        return String::new();
    };

    let Some(activity) = presence
        .activities
        .iter()
        .find(|activity| activity.kind == ActivityKind::Custom)
    else {
        return String::new();
    };

    match activity.state.as_deref() {
        Some(state) if !state.is_empty() => state.to_lowercase(),
        _ => activity.name.to_lowercase(),
    }
}

/// Whether an extracted status advertises the vanity string.
///
/// An empty status never matches, otherwise an empty search string would match
/// everyone.
pub fn has_vanity(status: &str, vanity: &str) -> bool {
    !status.is_empty() && status.contains(&vanity.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presence::ActivitySnapshot;

    fn presence(activities: Vec<ActivitySnapshot>) -> PresenceSnapshot {
        PresenceSnapshot { activities }
    }

    /// Tests that an absent presence yields no status.
    ///
    /// Expected: empty string
    #[test]
    fn absent_presence_is_empty() {
        assert_eq!(extract_custom_status(None), "");
    }

    /// Tests that presences without a custom activity yield no status.
    ///
    /// Expected: empty string despite other activities carrying text
    #[test]
    fn no_custom_activity_is_empty() {
        let presence = presence(vec![
            ActivitySnapshot::new(ActivityKind::Playing, "Game /vanity", Some("in menus")),
            ActivitySnapshot::new(ActivityKind::Listening, "Spotify", Some("/vanity")),
        ]);

        assert_eq!(extract_custom_status(Some(&presence)), "");
    }

    /// Tests that the state text is preferred and lowercased.
    ///
    /// Expected: lowercase state text
    #[test]
    fn prefers_state_and_lowercases() {
        let presence = presence(vec![ActivitySnapshot::new(
            ActivityKind::Custom,
            "Custom Status",
            Some("Join DISCORD.GG/Example"),
        )]);

        assert_eq!(
            extract_custom_status(Some(&presence)),
            "join discord.gg/example"
        );
    }

    /// Tests falling back to the name when state is empty or missing.
    ///
    /// Expected: lowercase name text
    #[test]
    fn falls_back_to_name() {
        let empty_state = presence(vec![ActivitySnapshot::new(
            ActivityKind::Custom,
            "Via Name",
            Some(""),
        )]);
        let no_state = presence(vec![ActivitySnapshot::new(
            ActivityKind::Custom,
            "Via Name",
            None,
        )]);

        assert_eq!(extract_custom_status(Some(&empty_state)), "via name");
        assert_eq!(extract_custom_status(Some(&no_state)), "via name");
    }

    /// Tests the first-match rule across several custom activities.
    ///
    /// Expected: only the first custom activity is read, even when it is blank
    #[test]
    fn first_custom_activity_wins() {
        let presence = presence(vec![
            ActivitySnapshot::new(ActivityKind::Playing, "Game", Some("ignored")),
            ActivitySnapshot::new(ActivityKind::Custom, "First", None),
            ActivitySnapshot::new(ActivityKind::Custom, "Second", Some("second state")),
        ]);
        let blank_first = self::presence(vec![
            ActivitySnapshot::new(ActivityKind::Custom, "", None),
            ActivitySnapshot::new(ActivityKind::Custom, "Second", Some("second state")),
        ]);

        assert_eq!(extract_custom_status(Some(&presence)), "first");
        assert_eq!(extract_custom_status(Some(&blank_first)), "");
    }

    /// Tests that an empty status never matches.
    ///
    /// Expected: false for any search string, including the empty one
    #[test]
    fn empty_status_never_matches() {
        assert!(!has_vanity("", ""));
        assert!(!has_vanity("", "/example"));
    }

    /// Tests case-insensitive substring matching.
    ///
    /// Expected: match regardless of the search string's case
    #[test]
    fn matches_substring_case_insensitively() {
        assert!(has_vanity("join discord.gg/example today", "Discord.gg/EXAMPLE"));
        assert!(!has_vanity("join discord.gg/other", "discord.gg/example"));
    }
}
