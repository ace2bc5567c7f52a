//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by directory, record and session operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Phone index outside the record's phone list
    #[error("Phone index {index} is out of range (contact has {len} phone(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// No contact stored under this name
    #[error("Name not found in contacts: {0}")]
    KeyNotFound(String),

    /// A record was stored under a key that is not its own name
    #[error("Record '{record}' cannot be stored under key '{key}'")]
    KeyMismatch { key: String, record: String },

    /// Wrong number or shape of command arguments
    #[error("Command '{command}' expects: {usage}")]
    BadArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The line is empty
    #[error("Empty command, type 'help' to see available commands")]
    EmptyCommand,

    /// The verb is not recognised
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// Save or load failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors that can occur while saving or loading the directory.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory could not be encoded
    #[error("Failed to encode contacts: {0}")]
    Serialization(String),

    /// The file exists but does not hold a readable directory
    #[error("Corrupt or incompatible contacts file: {0}")]
    Deserialization(String),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
