//! CPF check-digit validation
//!
//! A CPF is 11 decimal digits where the last two are modulo-11 check digits
//! computed over the preceding ones. Validation is a pure function of its
//! input: it never panics and reports the first rule that failed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::user::UserErrorCode;

/// Number of digits in a normalized CPF
pub const CPF_LENGTH: usize = 11;

/// Reason a document was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentRejection {
    #[serde(rename = "BLANK")]
    Blank,
    #[serde(rename = "INVALID_LENGTH")]
    InvalidLength,
    #[serde(rename = "NON_NUMERIC")]
    NonNumeric,
    #[serde(rename = "REPEATED_DIGITS")]
    RepeatedDigits,
    #[serde(rename = "BAD_CHECK_DIGIT_1")]
    BadCheckDigit1,
    #[serde(rename = "BAD_CHECK_DIGIT_2")]
    BadCheckDigit2,
}

impl DocumentRejection {
    /// Stable reason name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "BLANK",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::NonNumeric => "NON_NUMERIC",
            Self::RepeatedDigits => "REPEATED_DIGITS",
            Self::BadCheckDigit1 => "BAD_CHECK_DIGIT_1",
            Self::BadCheckDigit2 => "BAD_CHECK_DIGIT_2",
        }
    }

    /// User-facing error code
    ///
    /// A missing document and a malformed one are reported under different
    /// codes; every structural or checksum failure shares the CPF code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Blank => UserErrorCode::MissingDocument.code(),
            _ => UserErrorCode::InvalidCpf.code(),
        }
    }
}

impl fmt::Display for DocumentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "The document is required"),
            Self::InvalidLength => write!(f, "The document must contain {} digits", CPF_LENGTH),
            Self::NonNumeric => write!(f, "The document must contain only digits"),
            Self::RepeatedDigits => write!(f, "The document cannot be a repeated-digit sequence"),
            Self::BadCheckDigit1 | Self::BadCheckDigit2 => {
                write!(f, "The document is not a valid CPF")
            }
        }
    }
}

impl std::error::Error for DocumentRejection {}

/// Result of validating a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(DocumentRejection),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn rejection(&self) -> Option<DocumentRejection> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<(), DocumentRejection> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(reason) => Err(reason),
        }
    }
}

/// Strip every character that is not an ASCII letter or digit
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Validate a raw document string
pub fn validate(raw: &str) -> ValidationOutcome {
    match digit_vector(raw) {
        Ok(digits) => verify_check_digits(&digits),
        Err(reason) => ValidationOutcome::Invalid(reason),
    }
}

/// Validate an optional document, treating a missing value as blank
pub fn validate_optional(raw: Option<&str>) -> ValidationOutcome {
    match raw {
        Some(raw) => validate(raw),
        None => ValidationOutcome::Invalid(DocumentRejection::Blank),
    }
}

/// Expected check digit at `position` (9 or 10), computed over the digits before it
///
/// Weights start at `position + 1` and decrease to 2. Any other position
/// yields `None`.
pub fn check_digit(digits: &[u8; CPF_LENGTH], position: usize) -> Option<u8> {
    if !(CPF_LENGTH - 2..CPF_LENGTH).contains(&position) {
        return None;
    }

    let sum: u32 = digits[..position]
        .iter()
        .zip((2..=position as u32 + 1).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();

    let remainder = sum % 11;

    Some(if remainder < 2 { 0 } else { (11 - remainder) as u8 })
}

/// Whitespace as `String::isBlank` sees it on the JVM: no-break spaces and
/// NEL are not blank, the information separators U+001C..U+001F are
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Run the structural rules and extract the 11 digits
pub(super) fn digit_vector(raw: &str) -> Result<[u8; CPF_LENGTH], DocumentRejection> {
    if raw.chars().all(is_blank_char) {
        return Err(DocumentRejection::Blank);
    }

    let normalized = normalize(raw);

    if normalized.len() != CPF_LENGTH {
        return Err(DocumentRejection::InvalidLength);
    }

    let mut digits = [0u8; CPF_LENGTH];

    for (slot, byte) in digits.iter_mut().zip(normalized.bytes()) {
        if !byte.is_ascii_digit() {
            return Err(DocumentRejection::NonNumeric);
        }
        *slot = byte - b'0';
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(DocumentRejection::RepeatedDigits);
    }

    Ok(digits)
}

pub(super) fn verify_check_digits(digits: &[u8; CPF_LENGTH]) -> ValidationOutcome {
    if check_digit(digits, 9) != Some(digits[9]) {
        return ValidationOutcome::Invalid(DocumentRejection::BadCheckDigit1);
    }

    if check_digit(digits, 10) != Some(digits[10]) {
        return ValidationOutcome::Invalid(DocumentRejection::BadCheckDigit2);
    }

    ValidationOutcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection_of(raw: &str) -> Option<DocumentRejection> {
        validate(raw).rejection()
    }

    #[test]
    fn test_valid_unformatted() {
        assert_eq!(validate("00588380903"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_valid_with_formatting() {
        assert!(validate("005.883.809-03").is_valid());
        assert!(validate("005-883-809.03").is_valid());
        assert!(validate("005.883.80903").is_valid());
        assert!(validate("005 883 809 03").is_valid());
    }

    #[test]
    fn test_known_valid_documents() {
        for cpf in ["11144477735", "52998224725", "34608514300", "70351457100"] {
            assert!(validate(cpf).is_valid(), "{} should be valid", cpf);
        }
    }

    #[test]
    fn test_remainder_below_two_yields_zero() {
        assert!(validate("00000000191").is_valid());
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1, 9, 1], 9), Some(0));
    }

    #[test]
    fn test_blank() {
        for raw in ["", "   ", "\t", "\n", "\u{1F}", "\u{2003}\u{3000}"] {
            assert_eq!(rejection_of(raw), Some(DocumentRejection::Blank), "{:?}", raw);
        }
    }

    #[test]
    fn test_no_break_space_is_not_blank() {
        for raw in ["\u{A0}", "\u{2007}", "\u{202F}", "\u{85}", " \u{A0} "] {
            assert_eq!(
                rejection_of(raw),
                Some(DocumentRejection::InvalidLength),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_missing_is_blank() {
        assert_eq!(
            validate_optional(None),
            ValidationOutcome::Invalid(DocumentRejection::Blank)
        );
        assert!(validate_optional(Some("00588380903")).is_valid());
    }

    #[test]
    fn test_invalid_length() {
        for raw in [
            "123456789",
            "1234567890",
            "123456789012",
            "12345678901234",
            "12345@67890",
            "123#4567890",
            "...---...--",
        ] {
            assert_eq!(
                rejection_of(raw),
                Some(DocumentRejection::InvalidLength),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_letters_count_toward_length() {
        assert_eq!(rejection_of("abc12345678"), Some(DocumentRejection::NonNumeric));
        assert_eq!(rejection_of("1234567890a"), Some(DocumentRejection::NonNumeric));
        assert_eq!(rejection_of("abc1234567"), Some(DocumentRejection::InvalidLength));
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        assert_eq!(rejection_of("ç0058838090"), Some(DocumentRejection::InvalidLength));
        assert!(validate("005.883.809-03é").is_valid());
    }

    #[test]
    fn test_repeated_digits() {
        for d in 0..10 {
            let raw = d.to_string().repeat(11);
            assert_eq!(
                rejection_of(&raw),
                Some(DocumentRejection::RepeatedDigits),
                "{}",
                raw
            );
        }
        assert_eq!(
            rejection_of("111.111.111-11"),
            Some(DocumentRejection::RepeatedDigits)
        );
    }

    #[test]
    fn test_bad_first_check_digit() {
        for raw in ["00588380913", "11144477745", "52998224735", "12345678919"] {
            assert_eq!(
                rejection_of(raw),
                Some(DocumentRejection::BadCheckDigit1),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_bad_second_check_digit() {
        for raw in ["00588380904", "11144477734", "52998224720"] {
            assert_eq!(
                rejection_of(raw),
                Some(DocumentRejection::BadCheckDigit2),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_first_digit_correct_but_second_wrong() {
        // 123.456.789-09 is valid, so only the last digit is off
        for raw in ["12345678900", "00588380902", "11144477736", "52998224726"] {
            assert_eq!(
                rejection_of(raw),
                Some(DocumentRejection::BadCheckDigit2),
                "{}",
                raw
            );
        }
        assert!(validate("12345678909").is_valid());
    }

    #[test]
    fn test_check_digit_helper() {
        let digits = [0, 0, 5, 8, 8, 3, 8, 0, 9, 0, 3];
        assert_eq!(check_digit(&digits, 9), Some(0));
        assert_eq!(check_digit(&digits, 10), Some(3));
    }

    #[test]
    fn test_check_digit_outside_check_positions() {
        let digits = [0, 0, 5, 8, 8, 3, 8, 0, 9, 0, 3];
        for position in [0, 1, 8, 11, 12, usize::MAX] {
            assert_eq!(check_digit(&digits, position), None, "{}", position);
        }
    }

    #[test]
    fn test_repeated_invocation_is_stable() {
        let first = validate("00588380903");
        for _ in 0..3 {
            assert_eq!(validate("00588380903"), first);
        }
        assert_eq!(validate("12345678900"), validate("12345678900"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("005.883.809-03"), "00588380903");
        assert_eq!(normalize("ab c-1/2@3#"), "abc123");
        assert_eq!(normalize("00588380903"), "00588380903");
        assert_eq!(normalize(&normalize("005.883.809-03")), normalize("005.883.809-03"));
    }

    #[test]
    fn test_rejection_codes() {
        assert_eq!(DocumentRejection::Blank.code(), "USER-0003");
        assert_eq!(DocumentRejection::InvalidLength.code(), "USER-0004");
        assert_eq!(DocumentRejection::BadCheckDigit2.code(), "USER-0004");
        assert_eq!(
            DocumentRejection::Blank.code(),
            UserErrorCode::MissingDocument.code()
        );
        assert_eq!(
            DocumentRejection::RepeatedDigits.code(),
            UserErrorCode::InvalidCpf.code()
        );
    }

    #[test]
    fn test_rejection_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentRejection::BadCheckDigit1).unwrap(),
            "\"BAD_CHECK_DIGIT_1\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentRejection::RepeatedDigits).unwrap(),
            "\"REPEATED_DIGITS\""
        );
        assert_eq!(DocumentRejection::BadCheckDigit2.as_str(), "BAD_CHECK_DIGIT_2");
    }

    #[test]
    fn test_outcome_into_result() {
        assert!(validate("00588380903").into_result().is_ok());
        assert_eq!(
            validate("").into_result(),
            Err(DocumentRejection::Blank)
        );
    }
}
