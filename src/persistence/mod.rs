//! Saving and loading the whole directory.
//!
//! # Architecture
//!
//! - **codec**: the [`DirectoryCodec`] contract and the [`StorageFormat`] selector
//! - **binary**: compact snapshot encoding used by `save`/`load`
//! - **json**: human-readable encoding used by `export`/`import`
//! - **file**: whole-file writes and reads for any codec

pub mod binary;
pub mod codec;
pub mod file;
pub mod json;

pub use binary::BinaryCodec;
pub use codec::{DirectoryCodec, StorageFormat};
pub use file::{load, save, LoadOutcome};
pub use json::JsonCodec;

/// File used by `save`/`load` when no path is given.
pub const DEFAULT_SNAPSHOT_PATH: &str = "data.bin";
