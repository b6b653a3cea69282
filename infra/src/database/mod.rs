//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Schema bootstrap for the two tables
//! - Repository implementations for OTP records and submissions

pub mod connection;
pub mod mysql;
pub mod schema;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlOtpRepository, MySqlSubmissionRepository};
pub use schema::ensure_schema;
