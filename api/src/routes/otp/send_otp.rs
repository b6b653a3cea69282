use actix_web::{web, HttpResponse};

use kyc_shared::phone::mask_mobile;
use kyc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::SendOtpRequest;
use crate::handlers::{ApiError, DomainResultExt};

/// Handler for POST /send-otp
///
/// Issues a code for the mobile number and hands it to the SMS provider.
///
/// # Request Body
///
/// ```json
/// { "mobile": "9876543210", "aadhaar": "123412341234", "name": "Asha Verma" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "ok": true, "message": "OTP sent (mock)" }
/// ```
///
/// ## Errors
/// - 400 `Invalid mobile` unless the mobile is exactly ten digits
/// - 500 `Failed to send OTP` when storage or delivery fails
pub async fn send_otp(
    state: web::Data<AppState>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    let SendOtpRequest {
        mobile,
        aadhaar,
        name,
    } = request.into_inner();

    let result = state
        .otp_service
        .issue(&mobile, aadhaar, name)
        .await
        .or_api_error("Failed to send OTP")?;

    tracing::info!(
        mobile = %mask_mobile(&mobile),
        message_id = %result.message_id,
        expires_at = %result.expires_at,
        "OTP sent"
    );

    let message = format!("OTP sent ({})", state.otp_service.delivery_provider());
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(message)))
}
