//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, email addresses and birthdays. Each value object
//! validates its input at construction time so that an invalid field can
//! never reach a [`Record`](crate::models::Record).

pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
