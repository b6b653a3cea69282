//! OTP repository trait defining the ledger's persistence interface.
//!
//! Implementations own expiry: a record whose `expires_at` is not after the
//! supplied `now` must never be returned, whether or not it has been purged.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::OtpRecord;
use crate::errors::DomainError;

/// Repository trait for OTP record persistence
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Store a newly issued record
    ///
    /// Several live records may exist for the same mobile at once.
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError>;

    /// Atomically find and delete one live record matching mobile and code
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - The consumed record (the oldest when several match)
    /// * `Ok(None)` - No live record matched
    /// * `Err(DomainError)` - Backend failure
    ///
    /// Two concurrent calls for the same record must not both return it.
    async fn take_valid(
        &self,
        mobile: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError>;

    /// Delete every record expired at `now`, returning how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Count live records for a mobile
    async fn count_live(&self, mobile: &str, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
