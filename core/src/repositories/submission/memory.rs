//! In-memory submission store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::SubmissionRecord;
use crate::errors::DomainError;

use super::trait_::SubmissionRepository;

/// Process-local submission repository
///
/// Records are appended in insertion order. Listing sorts by `created_at`
/// descending; records with equal timestamps come out newest insertion first.
#[derive(Clone, Default)]
pub struct InMemorySubmissionRepository {
    records: Arc<RwLock<Vec<SubmissionRecord>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, DomainError> {
        let records = self.records.read().await;

        // Reverse first so the stable sort keeps later insertions ahead on ties
        let mut newest_first: Vec<SubmissionRecord> = records.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        newest_first.truncate(limit);

        Ok(newest_first)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.records.read().await.len() as u64)
    }
}
