//! Email value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An email address, kept as an opaque label.
///
/// No format check is made beyond rejecting blank input: whatever the user
/// typed is stored and shown back unchanged.
///
/// # Example
///
/// ```
/// use contact_book::domain::Email;
///
/// let email = Email::new("anna@example.com").unwrap();
/// assert_eq!(email.as_str(), "anna@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` if the value is empty or only
    /// whitespace.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
