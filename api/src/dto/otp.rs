use serde::{Deserialize, Serialize};

use super::{optional_string_or_number, string_or_number};

/// Body of `POST /send-otp`
///
/// `aadhaar` and `name` are kept with the issued record but not validated.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SendOtpRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub mobile: String,

    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub aadhaar: Option<String>,

    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub name: Option<String>,
}

/// Body of `POST /verify-otp`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerifyOtpRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub mobile: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub otp: String,
}
