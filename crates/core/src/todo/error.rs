use thiserror::Error;

/// Errors that can occur when validating list and item titles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title too long (max 200 characters)")]
    TitleTooLong,
}

/// Errors that can occur when validating a todo list record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Anonymous list must carry a session token and an expiration")]
    MissingSessionBinding,
    #[error("Non-anonymous list must not carry a session token or an expiration")]
    UnexpectedSessionBinding,
}
