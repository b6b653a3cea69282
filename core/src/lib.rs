//! # KYC Onboarding Core
//!
//! Core business logic and domain layer for the KYC onboarding backend.
//! This crate contains the OTP ledger and submission store services, their
//! domain entities, repository interfaces (with in-memory implementations)
//! and the error types that the API layer maps onto HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    NewSubmission, OtpRecord, SubmissionRecord, CODE_LENGTH, DEFAULT_TTL_SECONDS, MAX_LIST_LIMIT,
};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{
    InMemoryOtpRepository, InMemorySubmissionRepository, OtpRepository, SubmissionRepository,
};
pub use services::{
    IssueOtpResult, OtpCleanupConfig, OtpCleanupService, OtpService, OtpServiceConfig,
    SmsServiceTrait, SubmissionService, VerifiedOtp,
};
