//! Redis configuration for the OTP ledger

use serde::{Deserialize, Serialize};

/// Redis configuration
///
/// Redis is optional: when no URL is configured the OTP ledger stays on the
/// primary storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL, `None` disables the Redis ledger
    #[serde(default)]
    pub url: Option<String>,

    /// Connection attempts before giving up at startup
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Key prefix for OTP entries
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_retries: default_max_retries(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").ok().filter(|u| !u.trim().is_empty());
        let max_retries = std::env::var("REDIS_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_retries);
        let key_prefix =
            std::env::var("REDIS_KEY_PREFIX").unwrap_or_else(|_| default_key_prefix());

        Self {
            url,
            max_retries,
            key_prefix,
        }
    }

    /// Create a configuration pointing at the given Redis URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            max_retries: default_max_retries(),
            key_prefix: default_key_prefix(),
        }
    }

    /// Whether the Redis ledger should be used
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_key_prefix() -> String {
    String::from("otp")
}
