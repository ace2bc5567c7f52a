//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A birth date entered and displayed as `dd-mm-yyyy`.
///
/// The value is held as a calendar date, not as text. Parsing is strict:
/// exactly two day digits, two month digits and four year digits separated
/// by `-`, and the result must be a real date (`31-04-1990` is rejected).
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15-06-1990").unwrap();
/// assert_eq!(birthday.to_string(), "15-06-1990");
/// assert!(Birthday::new("1990-06-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `dd-mm-yyyy` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on a malformed string or an
    /// impossible calendar date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        Self::parse(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(value.to_string()))
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        let bytes = value.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
            return None;
        }

        let digits_ok = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_ok {
            return None;
        }

        let day: u32 = value[0..2].parse().ok()?;
        let month: u32 = value[3..5].parse().ok()?;
        let year: i32 = value[6..10].parse().ok()?;
        if year < 1 {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday is celebrated in `year`.
    ///
    /// 29 February falls on 1 March in non-leap years.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}
