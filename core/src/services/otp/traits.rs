//! Traits for OTP delivery integration

use async_trait::async_trait;

/// Trait for SMS delivery of issued codes
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a verification code, returning the provider's message id
    async fn send_verification_code(&self, mobile: &str, code: &str) -> Result<String, String>;

    /// Provider name used in logs
    fn provider(&self) -> &str;
}
