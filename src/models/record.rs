//! Record model representing one contact in the directory.

use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers and optional email and birthday.
///
/// The name is fixed at construction. Renaming a contact means deleting the
/// record and adding a new one under the new name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    mail: Option<Email>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            mail: None,
            birthday: None,
        }
    }

    /// Create a record holding a single phone.
    pub fn with_phone(name: Name, phone: Phone) -> Self {
        let mut record = Self::new(name);
        record.add_phone(phone);
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn mail(&self) -> Option<&Email> {
        self.mail.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Replace the phone at `index`.
    pub fn edit_phone(&mut self, index: usize, phone: Phone) -> BookResult<()> {
        let len = self.phones.len();
        let slot = self
            .phones
            .get_mut(index)
            .ok_or(BookError::IndexOutOfRange { index, len })?;
        *slot = phone;
        Ok(())
    }

    /// Remove the phone at `index`, shifting later phones down by one.
    pub fn delete_phone(&mut self, index: usize) -> BookResult<Phone> {
        if index >= self.phones.len() {
            return Err(BookError::IndexOutOfRange {
                index,
                len: self.phones.len(),
            });
        }
        Ok(self.phones.remove(index))
    }

    pub fn set_mail(&mut self, mail: Email) {
        self.mail = Some(mail);
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Whether one of the phones is exactly `value`.
    pub fn has_phone(&self, value: &str) -> bool {
        self.phones.iter().any(|phone| phone.as_str() == value)
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, `0` when it is today.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.observed_in(today.year())?;
        if next < today {
            next = birthday.observed_in(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    /// Merge another record of the same contact into this one.
    ///
    /// Incoming phones are appended; email and birthday are replaced only
    /// when the incoming record carries them.
    pub(crate) fn absorb(&mut self, other: Record) {
        self.phones.extend(other.phones);
        if let Some(mail) = other.mail {
            self.mail = Some(mail);
        }
        if let Some(birthday) = other.birthday {
            self.birthday = Some(birthday);
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
            .join(", ");
        let mail = self.mail.as_ref().map_or("-", Email::as_str);
        let birthday = self
            .birthday
            .map_or_else(|| "-".to_string(), |b| b.to_string());

        write!(f, "{}: {} | {} | {}", self.name, phones, mail, birthday)
    }
}
