//! Field-level validation shared by the booking widget and back-office forms.
//!
//! Only format checks live here. Business validation (stock availability,
//! duplicate bookings, …) is the backend's job.

use once_cell::sync::Lazy;
use regex::Regex;

/// Mobile numbers: leading zero plus nine digits, e.g. "0987654321".
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0\d{9}$").expect("phone regex"));

/// Vietnamese civil license plates, tolerant of the common writing styles:
/// "30F-123.45", "51A12345", "29A-12345".
static PLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}[A-Z]{1,2}\d?\s?-?\d{3}\.?\d{2}$").expect("plate regex")
});

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

pub fn is_valid_license_plate(value: &str) -> bool {
    PLATE_RE.is_match(value.trim().to_uppercase().as_str())
}

/// Required-field check used when aggregating form errors.
pub fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} không được để trống", label))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        assert!(is_valid_phone("0987654321"));
    }

    #[test]
    fn test_phone_invalid() {
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("09876543210"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("098765432a"));
    }

    #[test]
    fn test_plate_valid() {
        assert!(is_valid_license_plate("30F-123.45"));
        assert!(is_valid_license_plate("51A12345"));
        assert!(is_valid_license_plate("29a-123.45"));
    }

    #[test]
    fn test_plate_invalid() {
        assert!(!is_valid_license_plate("ABC123"));
        assert!(!is_valid_license_plate(""));
        assert!(!is_valid_license_plate("3F-123.45"));
    }

    #[test]
    fn test_require() {
        assert!(require("x", "Tên").is_ok());
        assert!(require("   ", "Tên").is_err());
    }
}
