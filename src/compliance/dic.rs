//! Czech tax id (DIČ) format validation.

use std::fmt;

/// Error returned when a DIČ fails format validation.
#[derive(Debug, Clone)]
pub struct DicFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for DicFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid DIČ '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for DicFormatError {}

/// Validate a Czech DIČ by format (no registry lookup).
///
/// Expects the "CZ" prefix followed by 8–10 digits. Returns the digit part
/// on success.
pub fn validate_dic(dic: &str) -> Result<&str, DicFormatError> {
    let dic = dic.trim();
    let Some(number) = dic.strip_prefix("CZ") else {
        return Err(DicFormatError {
            value: dic.into(),
            reason: "missing CZ prefix".into(),
        });
    };
    if !(8..=10).contains(&number.len()) {
        return Err(DicFormatError {
            value: dic.into(),
            reason: "expected 8-10 digits after the prefix".into(),
        });
    }
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(DicFormatError {
            value: dic.into(),
            reason: "only digits may follow the prefix".into(),
        });
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_8_digits() {
        assert_eq!(validate_dic("CZ12345678").unwrap(), "12345678");
    }

    #[test]
    fn valid_10_digits() {
        assert_eq!(validate_dic("CZ1234567890").unwrap(), "1234567890");
    }

    #[test]
    fn whitespace_trimmed() {
        assert!(validate_dic("  CZ12345678  ").is_ok());
    }

    #[test]
    fn missing_prefix_rejected() {
        assert!(validate_dic("12345678").is_err());
        assert!(validate_dic("DE12345678").is_err());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(validate_dic("CZ1234567").is_err());
        assert!(validate_dic("CZ12345678901").is_err());
    }

    #[test]
    fn letters_rejected() {
        assert!(validate_dic("CZ1234567A").is_err());
    }

    #[test]
    fn error_display_names_value() {
        let e = validate_dic("CZ12").unwrap_err();
        let msg = e.to_string();
        assert!(msg.contains("CZ12"));
        assert!(msg.contains("invalid"));
    }
}
