use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the `.env.example`
    /// file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// Snowflake IDs must be unsigned integers, cooldowns must be whole seconds.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// The name of the variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// Vanity auto-assignment is enabled without a search string.
    ///
    /// An empty search string would match every non-empty custom status.
    #[error("VANITY_STRING is required when VANITY_AUTO_ENABLED is true")]
    MissingVanityString,
}
