//! Binary snapshot codec.
//!
//! Layout: the four magic bytes `CBK1` followed by the `bincode` encoding
//! of the name→record map.

use super::codec::{into_directory, DirectoryCodec, StorageFormat};
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Record;
use crate::repositories::Directory;
use bincode::Options;
use std::collections::BTreeMap;

const MAGIC: &[u8; 4] = b"CBK1";

// Fixed-width integers; anything after the encoded map is corruption.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Compact snapshot of the full directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl DirectoryCodec for BinaryCodec {
    fn format(&self) -> StorageFormat {
        StorageFormat::Binary
    }

    fn encode(&self, directory: &Directory) -> PersistenceResult<Vec<u8>> {
        let payload = options()
            .serialize(directory)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        let mut bytes = Vec::with_capacity(MAGIC.len() + payload.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> PersistenceResult<Directory> {
        let payload = bytes.strip_prefix(MAGIC.as_slice()).ok_or_else(|| {
            PersistenceError::Deserialization("not a contact book snapshot".to_string())
        })?;

        let records: BTreeMap<String, Record> = options()
            .deserialize(payload)
            .map_err(|e| PersistenceError::Deserialization(e.to_string()))?;

        into_directory(records)
    }
}
