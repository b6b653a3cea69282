//! Configuration for the OTP service

use kyc_shared::OtpConfig;

use crate::domain::entities::{CODE_LENGTH, DEFAULT_TTL_SECONDS};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds a code stays valid after issuance
    pub ttl_seconds: i64,
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Demo override replacing the random code
    pub fixed_code: Option<String>,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            code_length: CODE_LENGTH,
            fixed_code: None,
        }
    }
}

impl OtpServiceConfig {
    pub fn with_fixed_code(mut self, code: impl Into<String>) -> Self {
        self.fixed_code = Some(code.into());
        self
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            ttl_seconds: config.ttl_seconds,
            code_length: config.code_length,
            fixed_code: config.fixed_code.clone(),
        }
    }
}
