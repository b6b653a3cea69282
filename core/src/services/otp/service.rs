//! Main OTP ledger service implementation

use chrono::Utc;
use std::sync::Arc;

use kyc_shared::phone::{is_valid_mobile, mask_mobile};

use crate::domain::entities::OtpRecord;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::OtpRepository;

use super::config::OtpServiceConfig;
use super::traits::SmsServiceTrait;
use super::types::{IssueOtpResult, VerifiedOtp};

/// OTP ledger: issues codes and verifies them exactly once
pub struct OtpService<R: OtpRepository + ?Sized, S: SmsServiceTrait + ?Sized> {
    /// Storage backend for issued records
    repository: Arc<R>,
    /// Delivery channel for codes
    sms_service: Arc<S>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: OtpRepository + ?Sized, S: SmsServiceTrait + ?Sized> OtpService<R, S> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `repository` - Ledger storage implementation
    /// * `sms_service` - SMS delivery implementation
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, sms_service: Arc<S>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            sms_service,
            config,
        }
    }

    /// Name of the SMS provider codes are handed to
    pub fn delivery_provider(&self) -> &str {
        self.sms_service.provider()
    }

    /// Issue a code for a mobile number
    ///
    /// This method:
    /// 1. Validates the mobile number format
    /// 2. Generates a code (or uses the configured demo code)
    /// 3. Stores the record with its expiry
    /// 4. Hands the code to the SMS collaborator
    ///
    /// Earlier records for the same mobile stay valid until they expire.
    ///
    /// # Returns
    ///
    /// * `Ok(IssueOtpResult)` - Record id, expiry and delivery message id
    /// * `Err(DomainError)` - Invalid mobile, storage or delivery failure
    pub async fn issue(
        &self,
        mobile: &str,
        aadhaar: Option<String>,
        name: Option<String>,
    ) -> DomainResult<IssueOtpResult> {
        if !is_valid_mobile(mobile) {
            return Err(ValidationError::InvalidMobile.into());
        }

        let code = match &self.config.fixed_code {
            Some(fixed) => fixed.clone(),
            None => OtpRecord::generate_code(self.config.code_length),
        };

        let record = OtpRecord::new(mobile, code, self.config.ttl_seconds)
            .with_association(aadhaar, name);

        self.repository.insert(&record).await.map_err(|e| {
            tracing::error!(
                mobile = %mask_mobile(mobile),
                error = %e,
                event = "otp_storage_failed",
                "Failed to store OTP record"
            );
            e
        })?;

        tracing::info!(
            mobile = %mask_mobile(mobile),
            record_id = %record.id,
            expires_at = %record.expires_at,
            event = "otp_issued",
            "Issued OTP"
        );

        let message_id = self
            .sms_service
            .send_verification_code(mobile, &record.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    mobile = %mask_mobile(mobile),
                    provider = self.sms_service.provider(),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver OTP"
                );
                DomainError::Delivery { message: e }
            })?;

        Ok(IssueOtpResult {
            record_id: record.id,
            expires_at: record.expires_at,
            message_id,
        })
    }

    /// Verify a code, consuming the matching record
    ///
    /// The mobile must be ten digits and the code non-empty, otherwise the
    /// payload is rejected. The code is matched exactly. Wrong code, unknown
    /// mobile and expiry all yield [`DomainError::InvalidOrExpired`].
    pub async fn verify(&self, mobile: &str, code: &str) -> DomainResult<VerifiedOtp> {
        if !is_valid_mobile(mobile) || code.is_empty() {
            return Err(ValidationError::InvalidPayload.into());
        }

        let taken = self
            .repository
            .take_valid(mobile, code, Utc::now())
            .await
            .map_err(|e| {
                tracing::error!(
                    mobile = %mask_mobile(mobile),
                    error = %e,
                    event = "otp_verify_failed",
                    "Failed to verify OTP"
                );
                e
            })?;

        match taken {
            Some(record) => {
                tracing::info!(
                    mobile = %mask_mobile(mobile),
                    record_id = %record.id,
                    event = "otp_verified",
                    "OTP verified"
                );
                Ok(VerifiedOtp {
                    record_id: record.id,
                    associated_aadhaar: record.associated_aadhaar,
                    associated_name: record.associated_name,
                })
            }
            None => {
                tracing::warn!(
                    mobile = %mask_mobile(mobile),
                    event = "otp_rejected",
                    "Invalid or expired OTP"
                );
                Err(DomainError::InvalidOrExpired)
            }
        }
    }
}
