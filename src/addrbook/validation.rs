//! Field validation for contact data.
//!
//! Every semantic field kind has one pure validator:
//! - Names: non-empty, alphabetic characters only
//! - Phones: exactly ten ASCII digits
//! - Birthdays: a real calendar date written as `DD-MM-YYYY`

use chrono::NaiveDate;
use thiserror::Error;

/// The only birthday layout accepted, in chrono's notation.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// The same layout as users see it.
pub const BIRTHDAY_PATTERN: &str = "DD-MM-YYYY";

pub const PHONE_LENGTH: usize = 10;

/// Validates a contact name.
///
/// # Examples
/// ```
/// use addrbook::validation::validate_name;
///
/// assert!(validate_name("John").is_ok());
/// assert!(validate_name("Zoë").is_ok());
///
/// assert!(validate_name("").is_err());
/// assert!(validate_name("John2").is_err());
/// assert!(validate_name("John Smith").is_err());
/// ```
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    match raw.chars().find(|c| !c.is_alphabetic()) {
        Some(ch) => Err(ValidationError::NameCharacter(ch)),
        None => Ok(()),
    }
}

/// Validates a phone number: exactly ten decimal digits, nothing else.
///
/// # Examples
/// ```
/// use addrbook::validation::validate_phone;
///
/// assert!(validate_phone("0501234567").is_ok());
///
/// assert!(validate_phone("050123456").is_err());
/// assert!(validate_phone("050-123-4567").is_err());
/// ```
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if let Some(ch) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::PhoneCharacter(ch));
    }
    if raw.len() != PHONE_LENGTH {
        return Err(ValidationError::PhoneLength(raw.len()));
    }
    Ok(())
}

/// Validates a birthday and returns the parsed date.
///
/// Only the literal `DD-MM-YYYY` layout is accepted: zero-padded day and
/// month, four-digit year, hyphen separators.
///
/// # Examples
/// ```
/// use addrbook::validation::validate_birthday;
///
/// assert!(validate_birthday("24-12-1995").is_ok());
///
/// assert!(validate_birthday("24/12/1995").is_err());
/// assert!(validate_birthday("1995-12-24").is_err());
/// assert!(validate_birthday("4-12-1995").is_err());
/// assert!(validate_birthday("31-02-1995").is_err());
/// ```
pub fn validate_birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::BirthdayFormat(raw.to_string());

    if !has_birthday_shape(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid())
}

/// chrono tolerates unpadded fields, so the exact shape is checked first.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == BIRTHDAY_PATTERN.len()
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name format, name cannot be empty")]
    EmptyName,

    #[error("Invalid name format, must contain only letters (found '{0}')")]
    NameCharacter(char),

    #[error("Invalid phone number format, must contain only digits (found '{0}')")]
    PhoneCharacter(char),

    #[error("Invalid phone number format, must be 10 digits (got {0})")]
    PhoneLength(usize),

    #[error("Invalid birthday '{0}', must be in the format DD-MM-YYYY")]
    BirthdayFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("John").is_ok());
        assert!(validate_name("a").is_ok());
        assert!(validate_name("Олена").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_names_with_non_letters() {
        assert_eq!(
            validate_name("J0hn"),
            Err(ValidationError::NameCharacter('0'))
        );
        assert_eq!(
            validate_name("Mary Ann"),
            Err(ValidationError::NameCharacter(' '))
        );
        assert_eq!(
            validate_name("O'Neil"),
            Err(ValidationError::NameCharacter('\''))
        );
        assert!(validate_name("Anne-Marie").is_err());
    }

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("0000000000").is_ok());
    }

    #[test]
    fn test_phone_length() {
        assert_eq!(
            validate_phone("123456789"),
            Err(ValidationError::PhoneLength(9))
        );
        assert_eq!(
            validate_phone("12345678901"),
            Err(ValidationError::PhoneLength(11))
        );
        assert_eq!(validate_phone(""), Err(ValidationError::PhoneLength(0)));
    }

    #[test]
    fn test_phone_characters() {
        assert_eq!(
            validate_phone("12345a7890"),
            Err(ValidationError::PhoneCharacter('a'))
        );
        assert_eq!(
            validate_phone("+123456789"),
            Err(ValidationError::PhoneCharacter('+'))
        );
        assert!(validate_phone("１２３４５６７８９０").is_err());
    }

    #[test]
    fn test_valid_birthdays() {
        let date = validate_birthday("24-12-1995").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1995, 12, 24).unwrap());
        assert!(validate_birthday("29-02-2000").is_ok());
    }

    #[test]
    fn test_birthday_layouts_are_strict() {
        for raw in [
            "24.12.1995",
            "24/12/1995",
            "1995-12-24",
            "12-24-1995",
            "4-12-1995",
            "04-1-1995",
            "04-01-95",
            " 04-01-1995",
            "",
        ] {
            assert!(validate_birthday(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_birthday_must_be_real_date() {
        assert!(validate_birthday("31-04-2001").is_err());
        assert!(validate_birthday("29-02-2001").is_err());
        assert!(validate_birthday("00-01-2001").is_err());
    }
}
