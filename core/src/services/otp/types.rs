//! Types for OTP service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of issuing a code
///
/// The code itself is deliberately absent; it only travels through the
/// delivery collaborator.
#[derive(Debug, Clone)]
pub struct IssueOtpResult {
    /// Id of the stored record
    pub record_id: Uuid,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// The SMS message id from the provider
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifiedOtp {
    /// Id of the consumed record
    pub record_id: Uuid,
    /// Identity number supplied when the code was issued
    pub associated_aadhaar: Option<String>,
    /// Name supplied when the code was issued
    pub associated_name: Option<String>,
}
