//! Field format validators for the registration form

use once_cell::sync::Lazy;
use regex::Regex;

// Twelve-digit identity (Aadhaar) number
static IDENTITY_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

// Letters and whitespace only, 2 to 100 characters
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]{2,100}$").unwrap());

// Tax id (PAN): five letters, four digits, one letter
static TAX_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

/// Check if an identity number is exactly twelve ASCII digits
pub fn is_valid_identity_number(value: &str) -> bool {
    IDENTITY_NUMBER_REGEX.is_match(value)
}

/// Check if a name is 2-100 characters of ASCII letters and whitespace
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Check if a tax id matches `AAAAA9999A` (upper-case)
///
/// Callers that accept lower-case input should normalise with
/// [`normalize_tax_id`] first.
pub fn is_valid_tax_id(value: &str) -> bool {
    TAX_ID_REGEX.is_match(value)
}

/// Upper-case a tax id for matching and storage
pub fn normalize_tax_id(value: &str) -> String {
    value.to_ascii_uppercase()
}
