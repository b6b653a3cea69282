//! Cache module for the Redis-backed OTP ledger
//!
//! Each mobile number maps to one sorted set whose members are serialized
//! [`OtpRecord`](kyc_core::domain::entities::OtpRecord)s scored by their
//! expiry in epoch milliseconds.

pub mod otp_store;
pub mod redis_client;

pub use otp_store::RedisOtpRepository;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use kyc_shared::CacheConfig;
