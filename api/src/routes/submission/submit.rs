use actix_web::{web, HttpResponse};

use kyc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{SubmitRequest, SubmitResponse};
use crate::handlers::{ApiError, DomainResultExt};

/// Handler for POST /submit
///
/// Validates identity number, name, mobile and tax id in that order and
/// stores the form. Only the first failing field is reported.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "ok": true, "message": "Submission saved", "id": "6f1c..." }
/// ```
pub async fn submit(
    state: web::Data<AppState>,
    request: web::Json<SubmitRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = state
        .submission_service
        .submit(request.into_inner().into())
        .await
        .or_api_error("Failed to save submission")?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::success(SubmitResponse { id }).with_message("Submission saved"),
    ))
}
