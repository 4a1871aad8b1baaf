//! User validation utilities

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Full name is required")]
    EmptyFullName,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Email must be valid")]
    InvalidEmail,

    #[error("Phone is required")]
    EmptyPhone,

    #[error("Birthdate must be in the past")]
    BirthdateNotInPast,

    #[error("Age must be between {min} and {max} years")]
    AgeOutOfRange { min: u32, max: u32 },
}

pub fn validate_full_name(full_name: &str) -> Result<(), UserValidationError> {
    if full_name.trim().is_empty() {
        return Err(UserValidationError::EmptyFullName);
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !email.validate_email() {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), UserValidationError> {
    if phone.trim().is_empty() {
        return Err(UserValidationError::EmptyPhone);
    }

    Ok(())
}

/// Age in completed years on `today`
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    if birthdate >= today {
        return 0;
    }

    let mut years = today.year() - birthdate.year();

    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

/// Validate a birthdate
///
/// Rules:
/// - Must be strictly before `today`
/// - Age in completed years within `[min_age, max_age]`
pub fn validate_birthdate(
    birthdate: NaiveDate,
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> Result<(), UserValidationError> {
    if birthdate >= today {
        return Err(UserValidationError::BirthdateNotInPast);
    }

    let age = age_on(birthdate, today);

    if age < min_age || age > max_age {
        return Err(UserValidationError::AgeOutOfRange {
            min: min_age,
            max: max_age,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_name() {
        assert!(validate_full_name("Maria Silva").is_ok());
        assert_eq!(validate_full_name(""), Err(UserValidationError::EmptyFullName));
        assert_eq!(validate_full_name("  "), Err(UserValidationError::EmptyFullName));
    }

    #[test]
    fn test_email() {
        assert!(validate_email("maria@example.com").is_ok());
        assert_eq!(validate_email(" "), Err(UserValidationError::EmptyEmail));
        assert_eq!(validate_email("not-an-email"), Err(UserValidationError::InvalidEmail));
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("11999990000").is_ok());
        assert_eq!(validate_phone(""), Err(UserValidationError::EmptyPhone));
    }

    #[test]
    fn test_age_on() {
        let today = date(2024, 6, 15);
        assert_eq!(age_on(date(2000, 6, 15), today), 24);
        assert_eq!(age_on(date(2000, 6, 16), today), 23);
        assert_eq!(age_on(date(2024, 6, 14), today), 0);
        assert_eq!(age_on(date(2030, 1, 1), today), 0);
    }

    #[test]
    fn test_birthdate_must_be_in_past() {
        let today = date(2024, 6, 15);
        assert_eq!(
            validate_birthdate(today, today, 0, 120),
            Err(UserValidationError::BirthdateNotInPast)
        );
        assert_eq!(
            validate_birthdate(date(2024, 6, 16), today, 0, 120),
            Err(UserValidationError::BirthdateNotInPast)
        );
        assert!(validate_birthdate(date(2024, 6, 14), today, 0, 120).is_ok());
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let today = date(2024, 6, 15);
        assert!(validate_birthdate(date(2006, 6, 15), today, 18, 65).is_ok());
        assert!(validate_birthdate(date(1904, 6, 15), today, 0, 120).is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let today = date(2024, 6, 15);
        let expected = Err(UserValidationError::AgeOutOfRange { min: 18, max: 65 });

        assert_eq!(validate_birthdate(date(2007, 6, 15), today, 18, 65), expected);
        assert_eq!(validate_birthdate(date(1958, 6, 14), today, 18, 65), expected);
    }
}
