use thiserror::Error;

/// Malformed or incomplete interaction payloads.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("ServerID or username not found.")]
    MissingContext,

    #[error("Interaction has no command data")]
    MissingCommandData,

    #[error("Interaction has no channel")]
    MissingChannel,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A snowflake in the payload is not a valid u64.
    #[error("Invalid {field} '{value}' in interaction payload")]
    InvalidId { field: &'static str, value: String },
}
