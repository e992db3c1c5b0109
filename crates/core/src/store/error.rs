use thiserror::Error;

use crate::todo::ValidationError;

/// Errors that can occur during store operations.
///
/// Every failure is local to one operation: nothing here is fatal, and no
/// operation retries on its own. Driver errors are stringified at the
/// boundary so this taxonomy stays free of transport dependencies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected before any network call.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// The remote rejected the caller's credential or a rule was violated.
    #[error("Access denied: {0}")]
    AccessDenied(String),
    /// The entity is missing or not visible to the caller.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),
    /// The remote answered with an unexpected status.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    /// A response body that could not be decoded.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Not-found for an entity addressed by id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
