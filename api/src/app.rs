//! Application state and factory
//!
//! This module holds the shared services handed to every handler and builds
//! the Actix-web application around them.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use kyc_core::repositories::{OtpRepository, SubmissionRepository};
use kyc_core::services::{OtpService, SmsServiceTrait, SubmissionService};
use kyc_infra::cache::RedisClient;
use kyc_infra::database::DatabasePool;
use kyc_shared::{CorsConfig, ErrorResponse, StorageBackend};

use crate::handlers::error::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::{health, otp, submission};

/// OTP ledger as seen by the handlers, independent of the storage backend
pub type OtpLedger = OtpService<dyn OtpRepository, dyn SmsServiceTrait>;

/// Submission store as seen by the handlers
pub type SubmissionStore = SubmissionService<dyn SubmissionRepository>;

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub otp_service: Arc<OtpLedger>,
    pub submission_service: Arc<SubmissionStore>,
    /// Backend holding submissions, reported by `/health`
    pub storage: StorageBackend,
    /// Probed by `/health` when the MySQL backend is in use
    pub database: Option<DatabasePool>,
    /// Probed by `/health` when the OTP ledger lives in Redis
    pub cache: Option<RedisClient>,
}

impl AppState {
    pub fn new(
        otp_service: Arc<OtpLedger>,
        submission_service: Arc<SubmissionStore>,
        storage: StorageBackend,
    ) -> Self {
        Self {
            otp_service,
            submission_service,
            storage,
            database: None,
            cache: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }

    pub fn with_cache(mut self, client: RedisClient) -> Self {
        self.cache = Some(client);
        self
    }
}

/// Register every route on a service config
///
/// Split out from [`create_app`] so tests can mount the routes on a bare `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/send-otp", web::post().to(otp::send_otp))
        .route("/verify-otp", web::post().to(otp::verify_otp))
        .route("/submit", web::post().to(submission::submit))
        .route("/submissions", web::get().to(submission::list_submissions));
}

/// JSON extractor settings shared by every endpoint
pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler)
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config(max_payload_size))
        // Last wrap runs first: the tracing span covers CORS rejections too
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .configure(configure)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
