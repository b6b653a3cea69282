//! Shared fixtures for the route tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use kyc_api::bootstrap::{self, Backends};
use kyc_api::AppState;
use kyc_core::domain::entities::{OtpRecord, SubmissionRecord};
use kyc_core::errors::DomainError;
use kyc_core::repositories::{OtpRepository, SubmissionRepository};
use kyc_core::services::{OtpService, OtpServiceConfig, SmsServiceTrait, SubmissionService};
use kyc_infra::sms::MockSmsService;
use kyc_shared::StorageBackend;

pub const MOBILE: &str = "9876543210";
pub const CODE: &str = "123456";
pub const MAX_PAYLOAD: usize = 64 * 1024;

/// Build the full application around `$state` and start it
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(kyc_api::create_app(
            $state,
            &kyc_shared::CorsConfig::default(),
            $crate::common::MAX_PAYLOAD,
        ))
        .await
    };
}

/// POST a JSON body and decode the JSON answer
pub async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    read_json(test::call_service(app, req).await).await
}

/// GET a path and decode the JSON answer
pub async fn get_json<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    read_json(test::call_service(app, req).await).await
}

async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// In-memory services issuing the fixed demo code
pub fn test_backends() -> Backends {
    bootstrap::in_memory(
        OtpServiceConfig::default().with_fixed_code(CODE),
        Arc::new(MockSmsService::new()),
    )
}

pub fn test_state() -> web::Data<AppState> {
    web::Data::new(test_backends().state)
}

/// State whose repositories fail every call
pub fn failing_state() -> web::Data<AppState> {
    let otp_repository: Arc<dyn OtpRepository> = Arc::new(UnavailableStorage);
    let submission_repository: Arc<dyn SubmissionRepository> = Arc::new(UnavailableStorage);
    let sms: Arc<dyn SmsServiceTrait> = Arc::new(MockSmsService::new());

    let otp_service = OtpService::new(
        otp_repository,
        sms,
        OtpServiceConfig::default().with_fixed_code(CODE),
    );

    web::Data::new(AppState::new(
        Arc::new(otp_service),
        Arc::new(SubmissionService::new(submission_repository)),
        StorageBackend::MySql,
    ))
}

/// State whose SMS provider rejects every message
pub fn failing_delivery_state() -> web::Data<AppState> {
    let backends = bootstrap::in_memory(
        OtpServiceConfig::default().with_fixed_code(CODE),
        Arc::new(MockSmsService::failing()),
    );
    web::Data::new(backends.state)
}

/// A form that passes every check
pub fn valid_submission() -> Value {
    json!({
        "aadhaar": "123412341234",
        "name": "Asha Verma",
        "mobile": MOBILE,
        "pan": "ABCDE1234F",
        "pin": "560001",
        "city": "Bengaluru",
        "state": "Karnataka",
        "country": "India"
    })
}

/// Storage standing in for an unreachable database
pub struct UnavailableStorage;

fn unavailable() -> DomainError {
    DomainError::storage("connection refused")
}

#[async_trait]
impl OtpRepository for UnavailableStorage {
    async fn insert(&self, _record: &OtpRecord) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn take_valid(
        &self,
        _mobile: &str,
        _code: &str,
        _now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError> {
        Err(unavailable())
    }

    async fn purge_expired(&self, _now: DateTime<Utc>) -> Result<u64, DomainError> {
        Err(unavailable())
    }

    async fn count_live(&self, _mobile: &str, _now: DateTime<Utc>) -> Result<u64, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SubmissionRepository for UnavailableStorage {
    async fn insert(&self, _record: &SubmissionRecord) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn list_recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, DomainError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Err(unavailable())
    }
}
