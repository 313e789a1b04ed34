//! Environment-based bot configuration.
//!
//! Configuration is read once at startup. `main` loads a `.env` file with `dotenvy`
//! before calling [`Config::from_env`]. Parsing goes through [`Config::from_lookup`] so
//! tests can supply variables without touching the process environment.

use std::time::Duration;

use crate::error::config::ConfigError;

const DEFAULT_PREFIX: &str = "!";

/// Vanity auto-assignment settings.
#[derive(Debug, Clone, PartialEq)]
pub struct VanityConfig {
    /// Whether presence updates and the startup sweep reconcile the vanity role.
    pub enabled: bool,
    /// Preferred way to resolve the vanity role.
    pub role_id: Option<u64>,
    /// Fallback exact role name when the ID is unset or doesn't resolve.
    pub role_name: Option<String>,
    /// Substring searched for (case-insensitively) in a member's custom status.
    pub search: String,
    /// Per-user throttle for incremental reconciliation. Zero disables it.
    pub cooldown: Duration,
}

pub struct Config {
    pub bot_token: String,
    pub guild_id: u64,

    pub admin_role_id: Option<u64>,
    pub staff_role_id: Option<u64>,
    pub mod_role_id: Option<u64>,
    pub mute_role_id: Option<u64>,

    pub prefix: String,
    pub log_channel_id: Option<u64>,
    pub auto_nick_channel_id: Option<u64>,

    pub vanity: VanityConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for a variable name, if present
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError)` - A required variable is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bot_token =
            get("BOT_TOKEN").ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;
        let guild_id = parse_id("GUILD_ID", get("GUILD_ID"))?
            .ok_or_else(|| ConfigError::MissingEnvVar("GUILD_ID".to_string()))?;

        let vanity_enabled = match get("VANITY_AUTO_ENABLED") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "VANITY_AUTO_ENABLED".to_string(),
                value,
            })?,
            None => false,
        };

        let cooldown_secs = match get("VANITY_COOLDOWN") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "VANITY_COOLDOWN".to_string(),
                    value,
                })?,
            None => 0,
        };

        let search = get("VANITY_STRING").unwrap_or_default();
        if vanity_enabled && search.is_empty() {
            return Err(ConfigError::MissingVanityString);
        }

        Ok(Self {
            bot_token,
            guild_id,
            admin_role_id: parse_id("ADMIN_ROLE_ID", get("ADMIN_ROLE_ID"))?,
            staff_role_id: parse_id("STAFF_ROLE_ID", get("STAFF_ROLE_ID"))?,
            mod_role_id: parse_id("MOD_ROLE_ID", get("MOD_ROLE_ID"))?,
            mute_role_id: parse_id("MUTE_ROLE_ID", get("MUTE_ROLE_ID"))?,
            prefix: get("PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            log_channel_id: parse_id("DISCORD_LOG_CHANNEL_ID", get("DISCORD_LOG_CHANNEL_ID"))?,
            auto_nick_channel_id: parse_id("AUTO_NICK_CHANNEL_ID", get("AUTO_NICK_CHANNEL_ID"))?,
            vanity: VanityConfig {
                enabled: vanity_enabled,
                role_id: parse_id("VANITY_ROLE_ID", get("VANITY_ROLE_ID"))?,
                role_name: get("VANITY_ROLE_NAME"),
                search,
                cooldown: Duration::from_secs(cooldown_secs),
            },
        })
    }
}

/// Parses an optional snowflake ID variable.
fn parse_id(name: &str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        })
        .transpose()
}

/// Accepts `1`/`t`/`true` and `0`/`f`/`false` in their common casings.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    /// Tests loading a minimal configuration.
    ///
    /// Expected: Ok with defaults for every optional variable
    #[test]
    fn loads_required_with_defaults() {
        let config =
            Config::from_lookup(lookup(&[("BOT_TOKEN", "token"), ("GUILD_ID", "42")])).unwrap();

        assert_eq!(config.bot_token, "token");
        assert_eq!(config.guild_id, 42);
        assert_eq!(config.prefix, "!");
        assert_eq!(config.admin_role_id, None);
        assert!(!config.vanity.enabled);
        assert_eq!(config.vanity.cooldown, Duration::ZERO);
    }

    /// Tests that a missing token is fatal.
    ///
    /// Expected: Err(MissingEnvVar("BOT_TOKEN"))
    #[test]
    fn rejects_missing_token() {
        let result = Config::from_lookup(lookup(&[("GUILD_ID", "42")]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))
        );
    }

    /// Tests that an empty guild ID counts as missing.
    ///
    /// Expected: Err(MissingEnvVar("GUILD_ID"))
    #[test]
    fn treats_empty_guild_id_as_missing() {
        let result = Config::from_lookup(lookup(&[("BOT_TOKEN", "token"), ("GUILD_ID", " ")]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("GUILD_ID".to_string()))
        );
    }

    /// Tests that a non-numeric role ID is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) naming the variable
    #[test]
    fn rejects_malformed_role_id() {
        let result = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "token"),
            ("GUILD_ID", "42"),
            ("MOD_ROLE_ID", "moderators"),
        ]));

        assert_eq!(
            result.err(),
            Some(ConfigError::InvalidEnvVar {
                name: "MOD_ROLE_ID".to_string(),
                value: "moderators".to_string(),
            })
        );
    }

    /// Tests loading the full vanity configuration.
    ///
    /// Expected: Ok with role, search string and cooldown populated
    #[test]
    fn loads_vanity_settings() {
        let config = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "token"),
            ("GUILD_ID", "42"),
            ("VANITY_AUTO_ENABLED", "true"),
            ("VANITY_STRING", "/Example"),
            ("VANITY_ROLE_ID", "7"),
            ("VANITY_ROLE_NAME", "Supporter"),
            ("VANITY_COOLDOWN", "30"),
            ("PREFIX", "."),
        ]))
        .unwrap();

        assert_eq!(
            config.vanity,
            VanityConfig {
                enabled: true,
                role_id: Some(7),
                role_name: Some("Supporter".to_string()),
                search: "/Example".to_string(),
                cooldown: Duration::from_secs(30),
            }
        );
        assert_eq!(config.prefix, ".");
    }

    /// Tests that enabling vanity without a search string is fatal.
    ///
    /// Expected: Err(MissingVanityString)
    #[test]
    fn requires_vanity_string_when_enabled() {
        let result = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "token"),
            ("GUILD_ID", "42"),
            ("VANITY_AUTO_ENABLED", "1"),
        ]));

        assert_eq!(result.err(), Some(ConfigError::MissingVanityString));
    }

    /// Tests that an unparseable boolean is rejected rather than silently defaulted.
    ///
    /// Expected: Err(InvalidEnvVar) for VANITY_AUTO_ENABLED
    #[test]
    fn rejects_malformed_bool() {
        let result = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "token"),
            ("GUILD_ID", "42"),
            ("VANITY_AUTO_ENABLED", "yes"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "VANITY_AUTO_ENABLED"
        ));
    }

    /// Tests that a cooldown with a unit suffix is rejected rather than treated as zero.
    ///
    /// Expected: Err(InvalidEnvVar) carrying the raw value
    #[test]
    fn rejects_malformed_cooldown() {
        let result = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "token"),
            ("GUILD_ID", "42"),
            ("VANITY_COOLDOWN", "30s"),
        ]));

        assert_eq!(
            result.err(),
            Some(ConfigError::InvalidEnvVar {
                name: "VANITY_COOLDOWN".to_string(),
                value: "30s".to_string(),
            })
        );
    }
}
