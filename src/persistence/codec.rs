//! Directory encoding contract.

use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Record;
use crate::repositories::Directory;
use std::collections::BTreeMap;
use std::fmt;

use super::{BinaryCodec, JsonCodec};

/// Turns a [`Directory`] into bytes and back.
///
/// Implementations must round-trip every record exactly: the name, each
/// phone in order, the email and the birthday date.
pub trait DirectoryCodec {
    /// Format implemented by this codec.
    fn format(&self) -> StorageFormat;

    /// Encode the whole directory.
    fn encode(&self, directory: &Directory) -> PersistenceResult<Vec<u8>>;

    /// Decode a whole directory.
    ///
    /// Fails with `PersistenceError::Deserialization` on corrupt input.
    fn decode(&self, bytes: &[u8]) -> PersistenceResult<Directory>;
}

/// The available on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// Binary snapshot
    Binary,
    /// Pretty-printed JSON
    Json,
}

impl StorageFormat {
    /// Codec implementing this format.
    pub fn codec(self) -> &'static dyn DirectoryCodec {
        match self {
            StorageFormat::Binary => &BinaryCodec,
            StorageFormat::Json => &JsonCodec,
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFormat::Binary => write!(f, "binary"),
            StorageFormat::Json => write!(f, "json"),
        }
    }
}

/// Build a directory from a decoded map, rejecting misplaced records.
pub(crate) fn into_directory(records: BTreeMap<String, Record>) -> PersistenceResult<Directory> {
    Directory::try_from(records).map_err(|e| PersistenceError::Deserialization(e.to_string()))
}
