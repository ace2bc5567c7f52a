//! Contact Book - a personal contact directory.
//!
//! This library stores named contacts with validated phone numbers, an
//! optional email and an optional birthday, searches them by name or phone
//! and persists the whole directory to a file.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, email, birthday)
//! - **models**: The contact `Record`
//! - **repositories**: The keyed `Directory` store
//! - **matching**: Name and phone search rules
//! - **persistence**: Binary and JSON codecs, file save/load
//! - **services**: Per-operation entry points over one owned directory
//! - **commands**: Line parsing and dispatch for the interactive binary
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod persistence;
pub mod repositories;
pub mod services;

pub use commands::{Command, CommandKind, Reply};
pub use config::Config;
pub use domain::{Birthday, Email, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, PersistenceError};
pub use matching::{MatchResult, MatchType, RecordMatcher};
pub use models::Record;
pub use persistence::{BinaryCodec, DirectoryCodec, JsonCodec, LoadOutcome, StorageFormat};
pub use repositories::{Directory, UpsertOutcome};
pub use services::ContactService;
