//! Application service layer.
//!
//! The service owns the directory for one session and exposes one entry
//! point per user-facing operation. Entry points take already tokenized
//! arguments and return a reply string or structured records.

mod contact_service;

pub use contact_service::{usage, ContactService};
