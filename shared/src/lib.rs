//! Shared utilities and common types for the KYC onboarding server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON response envelope used by every endpoint
//! - Field validators (mobile, identity number, name, tax id) and log masking

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, OtpConfig,
    ServerConfig, StorageBackend,
};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::{phone, validation};
