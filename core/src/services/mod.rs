//! Business services containing domain logic and use cases.

pub mod otp;
pub mod submission;

// Re-export commonly used types
pub use otp::{
    IssueOtpResult, OtpCleanupConfig, OtpCleanupResult, OtpCleanupService, OtpService,
    OtpServiceConfig, SmsServiceTrait, VerifiedOtp,
};
pub use submission::SubmissionService;
