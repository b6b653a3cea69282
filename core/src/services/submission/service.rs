//! Submission store service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use kyc_shared::phone::mask_mobile;

use crate::domain::entities::{NewSubmission, SubmissionRecord, MAX_LIST_LIMIT};
use crate::errors::DomainResult;
use crate::repositories::SubmissionRepository;

/// Validates and persists form submissions
pub struct SubmissionService<R: SubmissionRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: SubmissionRepository + ?Sized> SubmissionService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a submission, returning its generated id
    ///
    /// Nothing is persisted when validation fails; the error names the first
    /// invalid field.
    pub async fn submit(&self, submission: NewSubmission) -> DomainResult<Uuid> {
        let record = submission.into_record(Utc::now()).map_err(|e| {
            tracing::debug!(field = e.field(), "Rejected submission");
            e
        })?;

        self.repository.insert(&record).await.map_err(|e| {
            tracing::error!(
                mobile = %mask_mobile(&record.mobile),
                error = %e,
                event = "submission_storage_failed",
                "Failed to save submission"
            );
            e
        })?;

        tracing::info!(
            submission_id = %record.id,
            mobile = %mask_mobile(&record.mobile),
            event = "submission_saved",
            "Saved submission"
        );

        Ok(record.id)
    }

    /// Most recent submissions, newest first
    ///
    /// `limit` is clamped to [`MAX_LIST_LIMIT`].
    pub async fn list(&self, limit: usize) -> DomainResult<Vec<SubmissionRecord>> {
        self.repository
            .list_recent(limit.min(MAX_LIST_LIMIT))
            .await
    }

    /// The default listing of up to [`MAX_LIST_LIMIT`] records
    pub async fn list_recent(&self) -> DomainResult<Vec<SubmissionRecord>> {
        self.list(MAX_LIST_LIMIT).await
    }
}
