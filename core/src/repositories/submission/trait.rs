//! Submission repository trait. Records are append-only.

use async_trait::async_trait;

use crate::domain::entities::SubmissionRecord;
use crate::errors::DomainError;

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Persist a validated record
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), DomainError>;

    /// Up to `limit` records, newest `created_at` first
    async fn list_recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, DomainError>;

    /// Total number of stored records
    async fn count(&self) -> Result<u64, DomainError>;
}
