use thiserror::Error;

/// Errors from repository operations (used by trait definitions in
/// receptionist-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors surfaced by the chat session manager.
///
/// An AI responder failure is deliberately NOT a variant here: the chat
/// layer recovers from it locally and reports it inside the turn outcome
/// (see `chat::TurnReply`). Only failures that abort the request before or
/// during persistence appear in this enum.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("message not found")]
    NotFound,

    #[error("storage error: {0}")]
    Store(#[from] RepositoryError),
}
