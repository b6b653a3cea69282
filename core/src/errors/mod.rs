//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors
///
/// The API layer maps `Validation` and `InvalidOrExpired` to 400 responses and
/// everything else to a generic 500 whose detail is only logged.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No live record matched; deliberately does not say which check failed
    #[error("Invalid or expired OTP")]
    InvalidOrExpired,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Delivery error: {message}")]
    Delivery { message: String },
}

impl DomainError {
    /// Build a storage error from any displayable cause
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        DomainError::Storage {
            message: cause.to_string(),
        }
    }

    /// Whether the error was caused by the request rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation(_) | DomainError::InvalidOrExpired)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
