//! Background sweeper for expired OTP records
//!
//! Verification already ignores expired records; the sweeper keeps the
//! backing store from growing with codes nobody used.

use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::DomainError;
use crate::repositories::OtpRepository;

/// Configuration for the OTP cleanup service
#[derive(Debug, Clone)]
pub struct OtpCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for OtpCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

impl OtpCleanupConfig {
    /// Build from an interval, where zero disables the sweeper
    pub fn every(interval_seconds: u64) -> Self {
        Self {
            interval_seconds,
            enabled: interval_seconds > 0,
        }
    }
}

/// Service for purging expired OTP records
pub struct OtpCleanupService<R: OtpRepository + ?Sized + 'static> {
    repository: Arc<R>,
    config: OtpCleanupConfig,
}

impl<R: OtpRepository + ?Sized + 'static> OtpCleanupService<R> {
    pub fn new(repository: Arc<R>, config: OtpCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    pub async fn run_cleanup(&self) -> Result<OtpCleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(OtpCleanupResult::default());
        }

        let purged = self.repository.purge_expired(Utc::now()).await?;
        if purged > 0 {
            info!(purged, event = "otp_sweep", "Purged expired OTP records");
        } else {
            debug!(event = "otp_sweep", "No expired OTP records");
        }

        Ok(OtpCleanupResult {
            expired_records_deleted: purged,
        })
    }

    /// Start the cleanup service as a background task
    ///
    /// Returns `None` when disabled. The caller aborts the returned handle on
    /// shutdown.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("OTP cleanup service is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                "OTP cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("OTP cleanup cycle failed: {}", e);
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OtpCleanupResult {
    /// Number of expired records deleted
    pub expired_records_deleted: u64,
}
