//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Optional Redis backend for the OTP ledger
//! - `database` - Database connection, pool configuration and storage backend
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time password lifetime, length and sweeping
//! - `server` - HTTP server and CORS configuration

pub mod cache;
pub mod database;
pub mod environment;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Which backend persists OTP records and submissions
    pub storage: StorageBackend,

    /// Redis configuration (OTP ledger only, optional)
    #[serde(default)]
    pub cache: CacheConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// OTP ledger configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// SMS provider name ("mock" is the only shipped provider)
    pub sms_provider: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            storage: StorageBackend::default(),
            cache: CacheConfig::default(),
            cors: CorsConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(env),
            sms_provider: String::from("mock"),
        }
    }
}

impl AppConfig {
    /// Configuration with in-memory storage, suitable for tests and local demos
    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            storage: StorageBackend::from_env(),
            cache: CacheConfig::from_env(),
            cors: CorsConfig::from_env(),
            otp: OtpConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
            sms_provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.storage, StorageBackend::MySql);
        assert_eq!(config.otp.ttl_seconds, 300);
        assert_eq!(config.sms_provider, "mock");
        assert!(!config.cache.is_enabled());
    }

    #[test]
    fn test_in_memory_config() {
        let config = AppConfig::in_memory();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(!config.is_production());
    }
}
