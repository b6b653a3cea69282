//! One-time password record held by the OTP ledger.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default length of a generated code
pub const CODE_LENGTH: usize = 6;

/// Default validity window for a code (5 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 300;

/// A pending one-time code bound to a mobile number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Unique identifier of this issuance
    pub id: Uuid,

    /// Ten-digit mobile number the code was issued for
    pub mobile: String,

    /// The code itself
    pub code: String,

    /// Identity number supplied alongside the request, if any
    pub associated_aadhaar: Option<String>,

    /// Applicant name supplied alongside the request, if any
    pub associated_name: Option<String>,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp from which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record issued now, valid for `ttl_seconds`
    pub fn new(mobile: impl Into<String>, code: impl Into<String>, ttl_seconds: i64) -> Self {
        Self::issued_at(mobile, code, Utc::now(), ttl_seconds)
    }

    /// Creates a record with an explicit issuance time
    pub fn issued_at(
        mobile: impl Into<String>,
        code: impl Into<String>,
        created_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mobile: mobile.into(),
            code: code.into(),
            associated_aadhaar: None,
            associated_name: None,
            created_at,
            expires_at: created_at + Duration::seconds(ttl_seconds),
        }
    }

    /// Attaches the optional identity number and name sent with the request
    ///
    /// Blank strings are stored as `None`.
    pub fn with_association(mut self, aadhaar: Option<String>, name: Option<String>) -> Self {
        self.associated_aadhaar = aadhaar.filter(|a| !a.trim().is_empty());
        self.associated_name = name.filter(|n| !n.trim().is_empty());
        self
    }

    /// Generates a random numeric code of `length` digits
    ///
    /// Digits are drawn independently from the OS CSPRNG, so every code of the
    /// given length is equally likely.
    pub fn generate_code(length: usize) -> String {
        let mut rng = OsRng;
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Whether the record is past its expiry at `now`
    ///
    /// The boundary is exclusive: a record is expired once
    /// `now - created_at >= ttl`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks mobile and code, comparing the code in constant time
    pub fn matches(&self, mobile: &str, code: &str) -> bool {
        self.mobile == mobile
            && self.code.len() == code.len()
            && constant_time_eq(self.code.as_bytes(), code.as_bytes())
    }
}
