//! Birthday value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Literal `DD.MM.YYYY` shape; calendar correctness is not checked here.
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid"));

/// A birthday stored as its literal `DD.MM.YYYY` string.
///
/// Only the digit shape is validated, so `31.02.1990` is accepted. The string
/// form is what gets persisted and searched; day and month are parsed from it
/// on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating the `DD.MM.YYYY` shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the shape does not match.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();

        if !Self::is_valid(&birthday) {
            return Err(ValidationError::InvalidBirthday(birthday));
        }

        Ok(Self(birthday))
    }

    /// Check a candidate string against the birthday format.
    pub fn is_valid(birthday: &str) -> bool {
        BIRTHDAY_RE.is_match(birthday)
    }

    /// Replace the stored birthday, keeping the old value if the new one is rejected.
    pub fn set(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(birthday)?;
        Ok(())
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Day of month, as written.
    pub fn day(&self) -> u32 {
        self.component(0..2)
    }

    /// Month, as written.
    pub fn month(&self) -> u32 {
        self.component(3..5)
    }

    /// Year, as written.
    pub fn year(&self) -> i32 {
        self.component(6..10) as i32
    }

    // The regex guarantees ASCII digits at these offsets.
    fn component(&self, range: std::ops::Range<usize>) -> u32 {
        self.0[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// The next date on or after `today` that falls on this birthday.
    ///
    /// A 29 February birthday lands on 1 March in non-leap years. Returns
    /// `None` when the day and month never form a calendar date (e.g. `31.04`).
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let (day, month) = (self.day(), self.month());

        // Reject pairs that are invalid in every year, leap years included.
        NaiveDate::from_ymd_opt(2000, month, day)?;

        let this_year = Self::occurrence_in(today.year(), month, day)?;
        if this_year >= today {
            Some(this_year)
        } else {
            Self::occurrence_in(today.year() + 1, month, day)
        }
    }

    fn occurrence_in(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }
}

impl Field for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Birthday {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.value(), "15.06.1990");
        assert_eq!(birthday.day(), 15);
        assert_eq!(birthday.month(), 6);
        assert_eq!(birthday.year(), 1990);
    }

    #[test]
    fn test_birthday_validates_shape() {
        assert!(Birthday::new("31.02.1990").is_ok());
        assert!(Birthday::new("00.00.0000").is_ok());

        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.06.1990").is_err());
        assert!(Birthday::new("15-06-1990").is_err());
        assert!(Birthday::new("1990.06.15").is_err());
        assert!(Birthday::new("15.06.90").is_err());
        assert!(Birthday::new("15.06.1990 ").is_err());
        assert!(Birthday::new("15x06x1990").is_err());
    }

    #[test]
    fn test_birthday_set_revalidates() {
        let mut birthday = Birthday::new("01.01.2000").unwrap();
        assert!(birthday.set("2000-01-01").is_err());
        assert_eq!(birthday.value(), "01.01.2000");

        birthday.set("02.02.2002").unwrap();
        assert_eq!(birthday.value(), "02.02.2002");
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("20.10.1985").unwrap();
        assert_eq!(birthday.next_occurrence(date(2026, 10, 18)), Some(date(2026, 10, 20)));
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::new("18.10.1985").unwrap();
        assert_eq!(birthday.next_occurrence(date(2026, 10, 18)), Some(date(2026, 10, 18)));
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let birthday = Birthday::new("01.01.1985").unwrap();
        assert_eq!(birthday.next_occurrence(date(2026, 10, 18)), Some(date(2027, 1, 1)));
    }

    #[test]
    fn test_next_occurrence_leap_day() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.next_occurrence(date(2027, 1, 10)), Some(date(2027, 3, 1)));
        assert_eq!(birthday.next_occurrence(date(2028, 1, 10)), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_next_occurrence_impossible_date() {
        let birthday = Birthday::new("31.04.1990").unwrap();
        assert_eq!(birthday.next_occurrence(date(2026, 1, 1)), None);
    }
}
