//! Input validation errors
//!
//! The display strings are the exact messages returned to the client, so each
//! one names the field that failed.

use thiserror::Error;

/// Validation errors for OTP and submission payloads
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid mobile")]
    InvalidMobile,

    /// Verification request with a malformed mobile or a blank code
    #[error("Invalid payload")]
    InvalidPayload,

    #[error("Invalid Aadhaar")]
    InvalidIdentityNumber,

    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid PAN")]
    InvalidTaxId,
}

impl ValidationError {
    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidMobile => "mobile",
            ValidationError::InvalidPayload => "payload",
            ValidationError::InvalidIdentityNumber => "aadhaar",
            ValidationError::InvalidName => "name",
            ValidationError::InvalidTaxId => "pan",
        }
    }
}
