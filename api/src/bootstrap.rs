//! Wiring of repositories and services for the configured backends
//!
//! Submissions live in MySQL or in memory. The OTP ledger follows the same
//! backend unless `REDIS_URL` is set, in which case it moves to Redis.

use std::sync::Arc;

use tokio::task::JoinHandle;

use kyc_core::repositories::{
    InMemoryOtpRepository, InMemorySubmissionRepository, OtpRepository, SubmissionRepository,
};
use kyc_core::services::{
    OtpCleanupConfig, OtpCleanupService, OtpService, OtpServiceConfig, SmsServiceTrait,
    SubmissionService,
};
use kyc_infra::cache::{RedisClient, RedisOtpRepository};
use kyc_infra::database::{
    ensure_schema, DatabasePool, MySqlOtpRepository, MySqlSubmissionRepository,
};
use kyc_infra::sms::create_sms_service;
use kyc_infra::InfrastructureError;
use kyc_shared::{AppConfig, StorageBackend};

use crate::app::AppState;

/// Everything the server needs, built from configuration
pub struct Backends {
    pub state: AppState,
    /// The ledger the sweeper purges
    pub otp_repository: Arc<dyn OtpRepository>,
}

impl Backends {
    /// Start the expired-record sweeper; `None` when the interval is zero
    pub fn start_sweeper(&self, interval_seconds: u64) -> Option<JoinHandle<()>> {
        let cleanup = OtpCleanupService::new(
            self.otp_repository.clone(),
            OtpCleanupConfig::every(interval_seconds),
        );
        Arc::new(cleanup).start_background_task()
    }

    /// Release pooled connections
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.state.database {
            pool.close().await;
        }
    }
}

/// Assemble services over process-local storage
pub fn in_memory(otp_config: OtpServiceConfig, sms: Arc<dyn SmsServiceTrait>) -> Backends {
    let otp_repository: Arc<dyn OtpRepository> = Arc::new(InMemoryOtpRepository::new());
    let submission_repository: Arc<dyn SubmissionRepository> =
        Arc::new(InMemorySubmissionRepository::new());

    assemble(
        otp_repository,
        submission_repository,
        sms,
        otp_config,
        StorageBackend::Memory,
    )
}

/// Connect to the configured backends and assemble the services
///
/// With MySQL the tables are created when missing. Connection failures are
/// returned rather than retried forever, so a misconfigured deployment fails
/// at startup.
pub async fn build(config: &AppConfig) -> Result<Backends, InfrastructureError> {
    let sms = create_sms_service(&config.sms_provider);
    let otp_config = OtpServiceConfig::from(&config.otp);

    if otp_config.fixed_code.is_some() {
        if config.is_production() {
            tracing::warn!("OTP_FIXED_CODE is set in production; every code is predictable");
        } else {
            tracing::info!("Using the fixed demo OTP code");
        }
    }

    let mut database = None;
    let (otp_repository, submission_repository): (
        Arc<dyn OtpRepository>,
        Arc<dyn SubmissionRepository>,
    ) = match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            (
                Arc::new(InMemoryOtpRepository::new()) as Arc<dyn OtpRepository>,
                Arc::new(InMemorySubmissionRepository::new()) as Arc<dyn SubmissionRepository>,
            )
        }
        StorageBackend::MySql => {
            let pool = DatabasePool::new(config.database.clone()).await?;
            ensure_schema(pool.get_pool()).await?;

            let mysql = pool.get_pool().clone();
            let repositories = (
                Arc::new(MySqlOtpRepository::new(mysql.clone())) as Arc<dyn OtpRepository>,
                Arc::new(MySqlSubmissionRepository::new(mysql)) as Arc<dyn SubmissionRepository>,
            );
            database = Some(pool);
            repositories
        }
    };

    let mut cache = None;
    let otp_repository: Arc<dyn OtpRepository> = if config.cache.is_enabled() {
        let client = RedisClient::new(config.cache.clone()).await?;
        tracing::info!("OTP ledger stored in Redis");
        cache = Some(client.clone());
        Arc::new(RedisOtpRepository::new(client))
    } else {
        otp_repository
    };

    let mut backends = assemble(
        otp_repository,
        submission_repository,
        sms,
        otp_config,
        config.storage,
    );
    backends.state.database = database;
    backends.state.cache = cache;

    Ok(backends)
}

fn assemble(
    otp_repository: Arc<dyn OtpRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
    sms: Arc<dyn SmsServiceTrait>,
    otp_config: OtpServiceConfig,
    storage: StorageBackend,
) -> Backends {
    let otp_service = Arc::new(OtpService::new(otp_repository.clone(), sms, otp_config));
    let submission_service = Arc::new(SubmissionService::new(submission_repository));

    Backends {
        state: AppState::new(otp_service, submission_service, storage),
        otp_repository,
    }
}
