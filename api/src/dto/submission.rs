use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kyc_core::domain::entities::{NewSubmission, SubmissionRecord};

use super::string_or_number;

/// Body of `POST /submit`
///
/// Wire names follow the registration form: `aadhaar`, `pan` and `pin`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubmitRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub aadhaar: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub mobile: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub pan: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub pin: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub city: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub state: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub country: String,
}

impl From<SubmitRequest> for NewSubmission {
    fn from(request: SubmitRequest) -> Self {
        NewSubmission {
            identity_number: request.aadhaar,
            name: request.name,
            mobile: request.mobile,
            tax_id: request.pan,
            postal_code: request.pin,
            city: request.city,
            state: request.state,
            country: request.country,
        }
    }
}

/// Payload of a successful `POST /submit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub id: Uuid,
}

/// Payload of `GET /submissions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<SubmissionRecord>,
}
