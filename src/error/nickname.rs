use thiserror::Error;

/// Rejected nickname requests.
///
/// The display text doubles as the reply sent back to the member.
#[derive(Error, Debug, PartialEq)]
pub enum NicknameError {
    #[error("❌ Nickname is too long! Maximum length is 32 characters.")]
    TooLong,

    /// Silently ignored, no reply is sent.
    #[error("Nickname is empty")]
    Empty,

    #[error("❌ Nickname cannot contain @ or # symbols.")]
    ForbiddenCharacter,
}
