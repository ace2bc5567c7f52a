//! Record storage.
//!
//! The [`Directory`] is the single keyed store of contacts. Persistence
//! codecs read and write it as a whole.

mod directory;

pub use directory::{Directory, UpsertOutcome};
