pub mod otp;
pub mod submission;

pub use otp::{InMemoryOtpRepository, OtpRepository};
pub use submission::{InMemorySubmissionRepository, SubmissionRepository};
