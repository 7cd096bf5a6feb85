use thiserror::Error;

/// Rejections of a self-registration request.
///
/// The display text of each variant is shown verbatim to the invoking user, so
/// the wording is part of the bot's user-facing behavior.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Friend code must be a 16 digit string")]
    InvalidFriendcode,

    #[error("Main account is already set, if you need to change it ask an admin")]
    MainAlreadySet,

    /// The user already holds the maximum number of alt accounts in the guild.
    #[error("Maximum of {0} alts per user allowed")]
    TooManyAlts(usize),

    /// Another account in the guild already uses this friend code.
    #[error("Friend code already registered")]
    FriendcodeTaken,
}
