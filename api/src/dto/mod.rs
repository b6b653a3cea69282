//! Request and response bodies
//!
//! Browsers and scripts send digits both as strings and as JSON numbers, so
//! text fields accept either and are read as their decimal text. Missing and
//! `null` fields read as empty, leaving the decision to the validators.

pub mod otp;
pub mod submission;

pub use otp::{SendOtpRequest, VerifyOtpRequest};
pub use submission::{SubmissionListResponse, SubmitRequest, SubmitResponse};

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }
}

/// Read a string or number field; `null` becomes an empty string
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Read an optional string or number field
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}
