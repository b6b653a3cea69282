//! Tests for the OTP cleanup service

use chrono::{Duration, Utc};
use std::sync::Arc;

use super::mocks::FailingOtpRepository;
use crate::domain::entities::OtpRecord;
use crate::repositories::{InMemoryOtpRepository, OtpRepository};
use crate::services::otp::{OtpCleanupConfig, OtpCleanupService};

#[tokio::test]
async fn test_run_cleanup_purges_only_expired() {
    let repository = Arc::new(InMemoryOtpRepository::new());
    let now = Utc::now();
    repository
        .insert(&OtpRecord::issued_at("9876543210", "111111", now - Duration::seconds(600), 300))
        .await
        .unwrap();
    repository
        .insert(&OtpRecord::new("9876543210", "222222", 300))
        .await
        .unwrap();

    let cleanup = OtpCleanupService::new(repository.clone(), OtpCleanupConfig::default());
    let result = cleanup.run_cleanup().await.unwrap();

    assert_eq!(result.expired_records_deleted, 1);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_disabled_cleanup_does_nothing() {
    let repository = Arc::new(InMemoryOtpRepository::new());
    repository
        .insert(&OtpRecord::issued_at(
            "9876543210",
            "111111",
            Utc::now() - Duration::seconds(600),
            300,
        ))
        .await
        .unwrap();

    let cleanup = Arc::new(OtpCleanupService::new(
        repository.clone(),
        OtpCleanupConfig::every(0),
    ));
    assert_eq!(cleanup.run_cleanup().await.unwrap().expired_records_deleted, 0);
    assert!(cleanup.start_background_task().is_none());
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_cleanup_propagates_storage_error() {
    let cleanup = OtpCleanupService::new(Arc::new(FailingOtpRepository), OtpCleanupConfig::default());
    assert!(cleanup.run_cleanup().await.is_err());
}

#[tokio::test]
async fn test_background_task_sweeps() {
    let repository = Arc::new(InMemoryOtpRepository::new());
    repository
        .insert(&OtpRecord::issued_at(
            "9876543210",
            "111111",
            Utc::now() - Duration::seconds(600),
            300,
        ))
        .await
        .unwrap();

    let cleanup = Arc::new(OtpCleanupService::new(
        repository.clone(),
        OtpCleanupConfig::every(3600),
    ));
    let handle = cleanup.start_background_task().unwrap();

    // The first interval tick fires immediately
    for _ in 0..50 {
        if repository.is_empty().await {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert!(repository.is_empty().await);

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());
}
