use actix_web::{web, HttpResponse};

use kyc_shared::phone::mask_mobile;
use kyc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::VerifyOtpRequest;
use crate::handlers::{ApiError, DomainResultExt};

/// Handler for POST /verify-otp
///
/// Consumes the matching code; a second call with the same code fails.
///
/// ## Errors
/// - 400 `Invalid payload` for a malformed mobile or blank code
/// - 400 `Invalid or expired OTP` when no live record matches
/// - 500 `Error verifying OTP` when the ledger is unreachable
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    let verified = state
        .otp_service
        .verify(&request.mobile, &request.otp)
        .await
        .or_api_error("Error verifying OTP")?;

    tracing::info!(
        mobile = %mask_mobile(&request.mobile),
        record_id = %verified.record_id,
        "OTP verified"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("OTP verified")))
}
