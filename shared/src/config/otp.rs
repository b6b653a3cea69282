//! OTP ledger configuration

use serde::{Deserialize, Serialize};

/// One-time password settings shared by the ledger and its sweeper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a code stays valid after issuance
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,

    /// Number of digits in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Demo code used instead of a random one (never set in production)
    #[serde(default)]
    pub fixed_code: Option<String>,

    /// Seconds between background purges of expired records, 0 disables
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            code_length: default_code_length(),
            fixed_code: None,
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let ttl_seconds = std::env::var("OTP_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ttl: &i64| *ttl > 0)
            .unwrap_or_else(default_ttl_seconds);
        let code_length = std::env::var("OTP_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|len: &usize| (4..=10).contains(len))
            .unwrap_or_else(default_code_length);
        let fixed_code = std::env::var("OTP_FIXED_CODE")
            .ok()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let sweep_interval_seconds = std::env::var("OTP_SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sweep_interval_seconds);

        Self {
            ttl_seconds,
            code_length,
            fixed_code,
            sweep_interval_seconds,
        }
    }

    /// Use a constant code instead of generating one
    pub fn with_fixed_code(mut self, code: impl Into<String>) -> Self {
        self.fixed_code = Some(code.into());
        self
    }

    /// Whether the background sweeper should run
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval_seconds > 0
    }
}

fn default_ttl_seconds() -> i64 {
    300 // 5 minutes
}

fn default_code_length() -> usize {
    6
}

fn default_sweep_interval_seconds() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_config_default() {
        let config = OtpConfig::default();
        assert_eq!(config.ttl_seconds, 300);
        assert_eq!(config.code_length, 6);
        assert!(config.fixed_code.is_none());
        assert!(config.sweep_enabled());
    }

    #[test]
    fn test_with_fixed_code() {
        let config = OtpConfig::default().with_fixed_code("123456");
        assert_eq!(config.fixed_code.as_deref(), Some("123456"));
    }

    #[test]
    fn test_sweep_can_be_disabled() {
        let config = OtpConfig {
            sweep_interval_seconds: 0,
            ..Default::default()
        };
        assert!(!config.sweep_enabled());
    }
}
