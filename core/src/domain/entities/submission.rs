//! KYC form submission entities.

use chrono::{DateTime, Utc};
use kyc_shared::validation::{
    is_valid_identity_number, is_valid_name, is_valid_tax_id, normalize_tax_id,
};
use kyc_shared::phone::is_valid_mobile;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Upper bound on the number of submissions returned by a listing
pub const MAX_LIST_LIMIT: usize = 200;

/// A persisted, immutable form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,

    /// 12-digit identity number
    #[serde(rename = "aadhaar")]
    pub identity_number: String,

    pub name: String,

    pub mobile: String,

    /// Tax id, always stored upper-case
    #[serde(rename = "pan")]
    pub tax_id: String,

    #[serde(rename = "pin")]
    pub postal_code: String,

    pub city: String,

    pub state: String,

    pub country: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Unvalidated submission payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSubmission {
    pub identity_number: String,
    pub name: String,
    pub mobile: String,
    pub tax_id: String,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl NewSubmission {
    /// Validates the payload, reporting the first failing field
    ///
    /// Fields are checked in the order identity number, name, mobile, tax id.
    /// The address fields are free-form and never rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_identity_number(&self.identity_number) {
            return Err(ValidationError::InvalidIdentityNumber);
        }
        if !is_valid_name(&self.name) {
            return Err(ValidationError::InvalidName);
        }
        if !is_valid_mobile(&self.mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        if !is_valid_tax_id(&normalize_tax_id(&self.tax_id)) {
            return Err(ValidationError::InvalidTaxId);
        }
        Ok(())
    }

    /// Validates and converts into a record stamped with `created_at`
    pub fn into_record(self, created_at: DateTime<Utc>) -> Result<SubmissionRecord, ValidationError> {
        self.validate()?;

        Ok(SubmissionRecord {
            id: Uuid::new_v4(),
            tax_id: normalize_tax_id(&self.tax_id),
            identity_number: self.identity_number,
            name: self.name,
            mobile: self.mobile,
            postal_code: self.postal_code,
            city: self.city,
            state: self.state,
            country: self.country,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> NewSubmission {
        NewSubmission {
            identity_number: "123412341234".to_string(),
            name: "Asha Verma".to_string(),
            mobile: "9876543210".to_string(),
            tax_id: "ABCDE1234F".to_string(),
            postal_code: "560001".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(valid_submission().validate(), Ok(()));
    }

    #[test]
    fn test_fields_checked_in_order() {
        let mut submission = valid_submission();
        submission.identity_number = "123".to_string();
        submission.name = "A".to_string();
        submission.mobile = "12".to_string();
        submission.tax_id = "bad".to_string();
        assert_eq!(
            submission.validate(),
            Err(ValidationError::InvalidIdentityNumber)
        );

        submission.identity_number = "123412341234".to_string();
        assert_eq!(submission.validate(), Err(ValidationError::InvalidName));

        submission.name = "Asha".to_string();
        assert_eq!(submission.validate(), Err(ValidationError::InvalidMobile));

        submission.mobile = "9876543210".to_string();
        assert_eq!(submission.validate(), Err(ValidationError::InvalidTaxId));
    }

    #[test]
    fn test_lowercase_tax_id_is_normalized() {
        let mut submission = valid_submission();
        submission.tax_id = "abcde1234f".to_string();

        let record = submission.into_record(Utc::now()).unwrap();
        assert_eq!(record.tax_id, "ABCDE1234F");
    }

    #[test]
    fn test_address_fields_kept_verbatim() {
        let mut submission = valid_submission();
        submission.postal_code = String::new();
        submission.city = " Pune ".to_string();

        let record = submission.into_record(Utc::now()).unwrap();
        assert_eq!(record.postal_code, "");
        assert_eq!(record.city, " Pune ");
    }

    #[test]
    fn test_wire_field_names() {
        let record = valid_submission().into_record(Utc::now()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        for key in [
            "id", "aadhaar", "name", "mobile", "pan", "pin", "city", "state", "country",
            "createdAt",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["pan"], "ABCDE1234F");
    }
}
