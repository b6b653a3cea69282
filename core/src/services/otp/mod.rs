//! OTP ledger service module
//!
//! This module provides the one-time password workflow:
//! - Code generation and issuance for a mobile number
//! - Single-use verification within the validity window
//! - Background sweeping of expired records
//! - Delivery through an injected SMS collaborator

mod cleanup;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use cleanup::{OtpCleanupConfig, OtpCleanupResult, OtpCleanupService};
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::SmsServiceTrait;
pub use types::{IssueOtpResult, VerifiedOtp};
