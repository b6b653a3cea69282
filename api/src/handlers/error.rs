use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use kyc_core::errors::{DomainError, DomainResult};
use kyc_shared::ErrorResponse;

/// Error returned by the route handlers
///
/// Client errors carry the domain message verbatim. Server errors carry a
/// fixed message per endpoint; the underlying cause only reaches the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: DomainError,
    },
}

impl ApiError {
    /// Map a domain error, using `server_message` if the backend is at fault
    pub fn from_domain(error: DomainError, server_message: &'static str) -> Self {
        if error.is_client_error() {
            ApiError::BadRequest(error.to_string())
        } else {
            tracing::error!(error = %error, "{}", server_message);
            ApiError::Internal {
                message: server_message,
                source: error,
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Extension for turning domain results into handler results
pub trait DomainResultExt<T> {
    fn or_api_error(self, server_message: &'static str) -> Result<T, ApiError>;
}

impl<T> DomainResultExt<T> for DomainResult<T> {
    fn or_api_error(self, server_message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_domain(e, server_message))
    }
}

/// Error handler for the JSON extractor
///
/// Malformed bodies, wrong content types and oversized payloads all answer
/// 400 with the usual envelope.
pub fn json_error_handler(error: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %error, "Rejected request body");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("Invalid payload"));
    InternalError::from_response(error, response).into()
}
