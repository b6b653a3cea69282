//! # Infrastructure Layer
//!
//! Concrete implementations of the storage and delivery interfaces defined in
//! `kyc_core`:
//! - **Database**: MySQL repositories for OTP records and submissions (SQLx)
//! - **Cache**: Redis-backed OTP ledger
//! - **SMS**: mock delivery that logs a masked notice
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable the Redis OTP ledger (default)

use kyc_core::errors::DomainError;
use kyc_shared::AppConfig;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and OTP ledger
#[cfg(feature = "redis-cache")]
pub mod cache;

/// SMS service module
pub mod sms;

/// Load application configuration from the environment
///
/// A `.env` file in the working directory is read first when present.
pub fn load_config() -> AppConfig {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }
    AppConfig::from_env()
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored data could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::storage(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_maps_to_storage() {
        let error = InfrastructureError::Config("missing url".to_string());
        let domain: DomainError = error.into();

        assert!(matches!(domain, DomainError::Storage { .. }));
        assert_eq!(
            domain.to_string(),
            "Storage error: Configuration error: missing url"
        );
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let error: InfrastructureError = sqlx::Error::RowNotFound.into();
        assert!(error.to_string().starts_with("Database error"));
    }
}
