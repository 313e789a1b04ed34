//! Parsing of user references in command arguments.

/// Extracts a user ID from a mention (`<@id>` or `<@!id>`) or a bare numeric ID.
///
/// # Returns
/// - `Some(u64)` - The referenced user ID
/// - `None` - Argument is neither a mention nor a number
pub fn parse_user_id(arg: &str) -> Option<u64> {
    let arg = arg.trim();

    let id = match arg.strip_prefix("<@").and_then(|rest| rest.strip_suffix('>')) {
        Some(inner) => inner.strip_prefix('!').unwrap_or(inner),
        None => arg,
    };

    id.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Like [`parse_user_id`], but bare IDs must look like a Discord snowflake (17 to 19
/// digits). Used where the target usually isn't a guild member any more.
pub fn parse_snowflake_user_id(arg: &str) -> Option<u64> {
    let arg = arg.trim();

    if arg.starts_with("<@") {
        return parse_user_id(arg);
    }

    let is_snowflake = (17..=19).contains(&arg.len()) && arg.bytes().all(|b| b.is_ascii_digit());
    if !is_snowflake {
        return None;
    }

    parse_user_id(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests both mention forms and a bare ID.
    ///
    /// Expected: Some(id) for each
    #[test]
    fn parses_mentions_and_ids() {
        assert_eq!(parse_user_id("<@123456789012345678>"), Some(123456789012345678));
        assert_eq!(parse_user_id("<@!123456789012345678>"), Some(123456789012345678));
        assert_eq!(parse_user_id(" 42 "), Some(42));
    }

    /// Tests rejected arguments.
    ///
    /// Expected: None for role mentions, text, and malformed mentions
    #[test]
    fn rejects_non_user_references() {
        assert_eq!(parse_user_id("<@&123>"), None);
        assert_eq!(parse_user_id("<#123>"), None);
        assert_eq!(parse_user_id("someone"), None);
        assert_eq!(parse_user_id("<@123"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("-5"), None);
    }

    /// Tests the snowflake length rule for raw IDs.
    ///
    /// Expected: 17 to 19 digits accepted, shorter or longer rejected, mentions accepted
    #[test]
    fn snowflake_requires_17_to_19_digits() {
        assert_eq!(
            parse_snowflake_user_id("12345678901234567"),
            Some(12345678901234567)
        );
        assert_eq!(
            parse_snowflake_user_id("1234567890123456789"),
            Some(1234567890123456789)
        );
        assert_eq!(parse_snowflake_user_id("1234567890123456"), None);
        assert_eq!(parse_snowflake_user_id("12345678901234567890"), None);
        assert_eq!(parse_snowflake_user_id("1234567890123456a"), None);
        assert_eq!(parse_snowflake_user_id("<@42>"), Some(42));
    }
}
