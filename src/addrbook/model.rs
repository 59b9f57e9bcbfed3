use crate::error::{BookError, Result};
use crate::validation::{
    validate_birthday, validate_name, validate_phone, ValidationError, BIRTHDAY_FORMAT,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact name. Only constructed through [`Name::parse`], so holding one
/// means the value already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> std::result::Result<Self, ValidationError> {
        validate_name(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        validate_name(&value)?;
        Ok(Self(value))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> std::result::Result<Self, ValidationError> {
        validate_phone(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        validate_phone(&value)?;
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birth date, rendered and persisted as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> std::result::Result<Self, ValidationError> {
        validate_birthday(raw).map(Self)
    }

    /// The first anniversary of this birthday falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        // Feb 29 recurs at most eight years apart.
        (today.year()..=today.year() + 8)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
            .find(|candidate| *candidate >= today)
            .unwrap_or(today)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// One contact: a name, any number of phones (duplicates allowed) and at most
/// one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(Phone::parse(raw)?);
        Ok(())
    }

    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Removes every phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> Result<()> {
        if self.find_phone(raw).is_none() {
            return Err(self.phone_not_found(raw));
        }
        self.phones.retain(|phone| phone.as_str() != raw);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with a validated `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let found = self
            .find_phone(old)
            .cloned()
            .ok_or_else(|| self.phone_not_found(old))?;
        let replacement = Phone::parse(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|phone| **phone == found) {
            *slot = replacement;
        }
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Days from `today` until the next birthday; zero when it is today.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Result<i64> {
        let birthday = self
            .birthday
            .as_ref()
            .ok_or_else(|| BookError::NoBirthday(self.name.to_string()))?;
        Ok((birthday.next_occurrence(today) - today).num_days())
    }

    fn phone_not_found(&self, phone: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact Name: {}, Phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn john() -> Record {
        Record::new(Name::parse("John").unwrap())
    }

    #[test]
    fn renders_phones_and_optional_birthday() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.to_string(), "Contact Name: John, Phones: 1234567890");

        record.add_phone("0987654321").unwrap();
        record.add_birthday("15-06-1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact Name: John, Phones: 1234567890; 0987654321, Birthday: 15-06-1990"
        );
    }

    #[test]
    fn duplicate_phones_are_kept() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn invalid_phone_is_rejected_without_mutation() {
        let mut record = john();
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_drops_every_copy() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890").unwrap();
        assert_eq!(record.phones(), &[Phone::parse("1111111111").unwrap()]);
    }

    #[test]
    fn remove_missing_phone_fails() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        let err = record.remove_phone("0000000000").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound { .. }));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn edit_phone_checks_old_then_new() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();

        let missing = record.edit_phone("9999999999", "3333333333").unwrap_err();
        assert!(matches!(missing, BookError::PhoneNotFound { .. }));

        let invalid = record.edit_phone("1111111111", "33").unwrap_err();
        assert!(matches!(invalid, BookError::Validation(_)));
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn edit_phone_touches_only_the_first_copy() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["3333333333", "1111111111"]);
        assert!(record.find_phone("1111111111").is_some());
    }

    #[test]
    fn find_phone_does_not_fail() {
        let mut record = john();
        assert!(record.find_phone("1234567890").is_none());
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.find_phone("1234567890").unwrap().as_str(), "1234567890");
    }

    #[test]
    fn birthday_is_set_once() {
        let mut record = john();
        record.add_birthday("15-06-1990").unwrap();
        let err = record.add_birthday("01-01-1991").unwrap_err();
        assert!(matches!(err, BookError::BirthdayAlreadySet(_)));
        assert_eq!(record.birthday().unwrap().to_string(), "15-06-1990");
    }

    #[test]
    fn days_to_birthday_requires_a_birthday() {
        let err = john().days_to_birthday(date(1, 1, 2024)).unwrap_err();
        assert!(matches!(err, BookError::NoBirthday(_)));
    }

    #[test]
    fn days_to_birthday_wraps_into_next_year() {
        let mut record = john();
        record.add_birthday("01-01-1990").unwrap();
        assert_eq!(record.days_to_birthday(date(31, 12, 2023)).unwrap(), 1);
        assert_eq!(record.days_to_birthday(date(1, 1, 2024)).unwrap(), 0);
        assert_eq!(record.days_to_birthday(date(2, 1, 2024)).unwrap(), 365);
    }

    #[test]
    fn days_to_birthday_later_this_year() {
        let mut record = john();
        record.add_birthday("15-06-1990").unwrap();
        assert_eq!(record.days_to_birthday(date(1, 6, 2023)).unwrap(), 14);
    }

    #[test]
    fn leap_day_birthdays_wait_for_a_leap_year() {
        let birthday = Birthday::parse("29-02-2000").unwrap();
        assert_eq!(birthday.next_occurrence(date(1, 3, 2023)), date(29, 2, 2024));
        assert_eq!(birthday.next_occurrence(date(29, 2, 2024)), date(29, 2, 2024));
    }

    #[test]
    fn fields_revalidate_on_deserialize() {
        let ok: Record =
            serde_json::from_str(r#"{"name":"Ann","phones":["1234567890"],"birthday":null}"#)
                .unwrap();
        assert_eq!(ok.name().as_str(), "Ann");

        let bad_phone = serde_json::from_str::<Record>(
            r#"{"name":"Ann","phones":["12-34"],"birthday":null}"#,
        );
        assert!(bad_phone.is_err());

        let bad_birthday = serde_json::from_str::<Record>(
            r#"{"name":"Ann","phones":[],"birthday":"2000-01-01"}"#,
        );
        assert!(bad_birthday.is_err());
    }
}
