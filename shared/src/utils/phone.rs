//! Mobile number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Ten-digit national mobile number, no country code or separators
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Check if a mobile number is exactly ten ASCII digits
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}

/// Mask a mobile number for logs (e.g., 98****3210)
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}
