use serenity::all::{ChannelId, UserId};
use serenity::http::Http;

/// Posts moderation audit entries to the configured log channel.
pub struct ModLogService<'a> {
    http: &'a Http,
    channel_id: Option<u64>,
}

impl<'a> ModLogService<'a> {
    pub fn new(http: &'a Http, channel_id: Option<u64>) -> Self {
        Self { http, channel_id }
    }

    /// Logs an action taken by `moderator_id` against `target_id`.
    ///
    /// Does nothing without a log channel. Usernames are looked up best-effort and
    /// replaced by "Unknown" on failure. Send failures are logged, never returned.
    ///
    /// # Arguments
    /// - `action` - Formatted action header, e.g. "🔨 **Ban**"
    /// - `moderator_id` - User who issued the command
    /// - `target_id` - User the command was applied to
    /// - `reason` - Optional reason line
    pub async fn log_action(
        &self,
        action: &str,
        moderator_id: u64,
        target_id: u64,
        reason: Option<&str>,
    ) {
        let Some(channel_id) = self.channel_id else {
            return;
        };

        let moderator_name = self.username(moderator_id).await;
        let target_name = self.username(target_id).await;

        let entry = format_entry(
            action,
            (moderator_id, &moderator_name),
            (target_id, &target_name),
            reason,
        );

        if let Err(e) = ChannelId::new(channel_id).say(self.http, entry).await {
            tracing::error!("Failed to send mod log entry to {}: {}", channel_id, e);
        }
    }

    async fn username(&self, user_id: u64) -> String {
        match self.http.get_user(UserId::new(user_id)).await {
            Ok(user) => user.name,
            Err(e) => {
                tracing::debug!("Failed to look up user {} for mod log: {}", user_id, e);
                "Unknown".to_string()
            }
        }
    }
}

/// Renders a mod log entry. `moderator` and `target` are `(id, username)` pairs.
pub fn format_entry(
    action: &str,
    moderator: (u64, &str),
    target: (u64, &str),
    reason: Option<&str>,
) -> String {
    let mut entry = format!(
        "{}\n**Moderator:** <@{}> ({})\n**Target:** <@{}> ({})",
        action, moderator.0, moderator.1, target.0, target.1
    );

    if let Some(reason) = reason.filter(|reason| !reason.is_empty()) {
        entry.push_str(&format!("\n**Reason:** {}", reason));
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests an entry with a reason.
    ///
    /// Expected: header, moderator, target and reason on separate lines
    #[test]
    fn formats_entry_with_reason() {
        let entry = format_entry("🔨 **Ban**", (1, "alice"), (2, "bob"), Some("spam"));

        assert_eq!(
            entry,
            "🔨 **Ban**\n**Moderator:** <@1> (alice)\n**Target:** <@2> (bob)\n**Reason:** spam"
        );
    }

    /// Tests entries without a usable reason.
    ///
    /// Expected: no reason line for None or an empty reason
    #[test]
    fn omits_missing_reason() {
        let expected = "🔊 **Unmute**\n**Moderator:** <@1> (alice)\n**Target:** <@2> (Unknown)";

        assert_eq!(
            format_entry("🔊 **Unmute**", (1, "alice"), (2, "Unknown"), None),
            expected
        );
        assert_eq!(
            format_entry("🔊 **Unmute**", (1, "alice"), (2, "Unknown"), Some("")),
            expected
        );
    }
}
