//! Mock SMS Service Implementation
//!
//! Logs deliveries instead of sending them. The mobile number is always
//! masked; the code itself only appears at debug level.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use kyc_core::services::SmsServiceTrait;
use kyc_shared::phone::mask_mobile;

/// Mock SMS service for development and testing
#[derive(Clone)]
pub struct MockSmsService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockSmsService {
    /// Create a new mock SMS service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock service that fails every delivery
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_verification_code(&self, mobile: &str, code: &str) -> Result<String, String> {
        let masked = mask_mobile(mobile);

        if self.simulate_failure {
            warn!(provider = "mock", mobile = %masked, "Mock SMS service simulating failure");
            return Err("Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_service",
            provider = "mock",
            mobile = %masked,
            message_id = %message_id,
            count,
            "OTP delivered (mock)"
        );
        debug!(target: "sms_service", mobile = %masked, code, "Mock OTP contents");

        Ok(message_id)
    }

    fn provider(&self) -> &str {
        "mock"
    }
}
