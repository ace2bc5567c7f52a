//! Structured text codec.

use super::codec::{into_directory, DirectoryCodec, StorageFormat};
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Record;
use crate::repositories::Directory;
use std::collections::BTreeMap;

/// Pretty-printed JSON object keyed by contact name.
///
/// ```json
/// {
///   "Bob": {
///     "name": "Bob",
///     "phones": ["+12-345-678-90-11"],
///     "mail": null,
///     "birthday": "15-06-1990"
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl DirectoryCodec for JsonCodec {
    fn format(&self) -> StorageFormat {
        StorageFormat::Json
    }

    fn encode(&self, directory: &Directory) -> PersistenceResult<Vec<u8>> {
        serde_json::to_vec_pretty(directory)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> PersistenceResult<Directory> {
        let records: BTreeMap<String, Record> = serde_json::from_slice(bytes)
            .map_err(|e| PersistenceError::Deserialization(e.to_string()))?;

        into_directory(records)
    }
}
