//! MySQL repository implementations

pub mod otp_repository_impl;
pub mod submission_repository_impl;

pub use otp_repository_impl::MySqlOtpRepository;
pub use submission_repository_impl::MySqlSubmissionRepository;
