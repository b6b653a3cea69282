//! In-memory OTP ledger backed by a `RwLock`ed vector.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::OtpRecord;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// Process-local OTP repository
///
/// Records are kept in issuance order, so the first match is the oldest.
/// Lookup and removal happen under one write lock, which makes
/// [`OtpRepository::take_valid`] atomic.
#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    records: Arc<RwLock<Vec<OtpRecord>>>,
}

impl InMemoryOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, expired ones included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn take_valid(
        &self,
        mobile: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let mut records = self.records.write().await;

        let position = records
            .iter()
            .position(|r| !r.is_expired_at(now) && r.matches(mobile, code));

        Ok(position.map(|index| records.remove(index)))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !r.is_expired_at(now));
        Ok((before - records.len()) as u64)
    }

    async fn count_live(&self, mobile: &str, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.mobile == mobile && !r.is_expired_at(now))
            .count() as u64)
    }
}
