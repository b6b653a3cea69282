//! Domain entities representing core business objects.

pub mod otp_record;
pub mod submission;

// Re-export commonly used types
pub use otp_record::{OtpRecord, CODE_LENGTH, DEFAULT_TTL_SECONDS};
pub use submission::{NewSubmission, SubmissionRecord, MAX_LIST_LIMIT};
