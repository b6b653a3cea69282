use actix_web::{web, HttpResponse};

use kyc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::SubmissionListResponse;
use crate::handlers::{ApiError, DomainResultExt};

/// Handler for GET /submissions
///
/// Returns at most 200 submissions, newest first.
pub async fn list_submissions(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let submissions = state
        .submission_service
        .list_recent()
        .await
        .or_api_error("Failed to fetch submissions")?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SubmissionListResponse { submissions })))
}
