//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. None of
//! these errors ever escape an event handler: every handler absorbs failures at its
//! boundary and logs them, so a single member's failure never stops the process. The
//! only place an `AppError` is fatal is during startup in `main`.

pub mod config;
pub mod nickname;
pub mod vanity;

use serenity::http::HttpError;
use thiserror::Error;

use crate::error::{config::ConfigError, vanity::VanityError};

/// Discord JSON error code for an invalid form body (e.g. a rejected nickname).
pub const DISCORD_INVALID_FORM_BODY: isize = 50035;

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Discord errors are classified
/// on conversion so callers can distinguish a permission problem from a missing
/// resource without inspecting the raw HTTP response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the bot does not connect with an invalid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Vanity role could not be resolved or failed the safety check.
    #[error(transparent)]
    VanityErr(#[from] VanityError),

    /// Discord API error from Serenity that is neither a 403 nor a 404.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Discord rejected the request with 403, usually missing permissions or a role
    /// hierarchy problem.
    ///
    /// # Fields
    /// - Message returned by Discord
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Discord returned 404 for the requested member, role, ban, or channel.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl AppError {
    /// Returns the Discord JSON error code if this error wraps an unsuccessful request.
    pub fn discord_code(&self) -> Option<isize> {
        match self {
            Self::DiscordErr(err) => match err.as_ref() {
                serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                    Some(response.error.code)
                }
                _ => None,
            },
            _ => None,
        }
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Unsuccessful requests with status 403 or 404 become `Forbidden` and `NotFound`
/// respectively. Everything else is boxed to keep the size of `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            match response.status_code.as_u16() {
                403 => return AppError::Forbidden(response.error.message.clone()),
                404 => return AppError::NotFound(response.error.message.clone()),
                _ => {}
            }
        }

        AppError::DiscordErr(Box::new(err))
    }
}
