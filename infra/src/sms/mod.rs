//! SMS Service Module
//!
//! Delivery of issued codes. Only a mock provider ships: it logs a masked
//! notice instead of contacting a gateway.

use std::sync::Arc;

use kyc_core::services::SmsServiceTrait;

pub mod mock_sms;

pub use mock_sms::MockSmsService;


/// Create an SMS service for the configured provider name
///
/// Unknown providers fall back to the mock implementation with a warning.
pub fn create_sms_service(provider: &str) -> Arc<dyn SmsServiceTrait> {
    match provider.trim().to_ascii_lowercase().as_str() {
        "mock" | "" => Arc::new(MockSmsService::new()),
        other => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                other
            );
            Arc::new(MockSmsService::new())
        }
    }
}
