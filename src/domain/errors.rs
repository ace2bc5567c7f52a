//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number does not match `+NN-NNN-NNN-NN-NN`.
    #[error("Phone number must be in the format of '+xx-xxx-xxx-xx-xx', got: {0}")]
    InvalidPhone(String),

    /// The provided email is empty.
    #[error("Email cannot be empty")]
    EmptyEmail,

    /// The provided birthday is not a real `dd-mm-yyyy` date.
    #[error("Birthdate must be in 'dd-mm-yyyy' format, got: {0}")]
    InvalidBirthday(String),
}
