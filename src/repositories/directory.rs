use crate::domain::Name;
use crate::error::{BookError, BookResult};
use crate::matching::{MatchResult, RecordMatcher};
use crate::models::Record;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Outcome of [`Directory::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No contact had this name; the record was inserted.
    Created,
    /// The record was merged into the existing contact.
    Merged,
}

/// Keyed store of contacts.
///
/// Every record is stored under its own name. Iteration is in key order,
/// which stays the same across a save/load round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any previous entry.
    ///
    /// No merge takes place; see [`Directory::upsert`] for that.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "Storing record");
        self.records.insert(key, record);
    }

    /// Replace the entry stored under `name`.
    ///
    /// The record must carry the same name as the key it is stored under.
    pub fn edit_record(&mut self, name: &Name, record: Record) -> BookResult<()> {
        if record.name() != name {
            return Err(BookError::KeyMismatch {
                key: name.to_string(),
                record: record.name().to_string(),
            });
        }
        self.add_record(record);
        Ok(())
    }

    /// Remove and return the record stored under `name`.
    pub fn delete_record(&mut self, name: &Name) -> BookResult<Record> {
        self.records
            .remove(name.as_str())
            .ok_or_else(|| BookError::KeyNotFound(name.to_string()))
    }

    /// Insert a new contact or merge into the existing one.
    ///
    /// On merge the incoming phones are appended and email/birthday are
    /// replaced when the incoming record has them.
    pub fn upsert(&mut self, record: Record) -> UpsertOutcome {
        match self.records.get_mut(record.name().as_str()) {
            Some(existing) => {
                existing.absorb(record);
                UpsertOutcome::Merged
            }
            None => {
                self.add_record(record);
                UpsertOutcome::Created
            }
        }
    }

    /// Exact lookup by full name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact lookup by full name, for in-place field edits.
    ///
    /// The name itself cannot be changed through the returned reference.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records whose name contains `name_substring`, ignoring case.
    pub fn find_records(&self, name_substring: &str) -> Vec<&Record> {
        let matcher = RecordMatcher::new(name_substring);
        let found: Vec<&Record> = self
            .records
            .iter()
            .filter(|(key, _)| matcher.name_matches(key))
            .map(|(_, record)| record)
            .collect();

        debug!(query = %name_substring, count = found.len(), "Name search");
        found
    }

    /// Records whose name contains `search_str` or that have a phone equal
    /// to it, with the rule that matched.
    pub fn find_contact_matches(&self, search_str: &str) -> Vec<MatchResult<'_>> {
        let matcher = RecordMatcher::new(search_str);
        let found: Vec<MatchResult<'_>> = self
            .records
            .iter()
            .filter_map(|(key, record)| matcher.match_contact(key, record))
            .collect();

        debug!(query = %search_str, count = found.len(), "Contact search");
        found
    }

    /// Records whose name contains `search_str` (case-sensitive) or that
    /// have a phone exactly equal to it.
    pub fn find_contact(&self, search_str: &str) -> Vec<&Record> {
        self.find_contact_matches(search_str)
            .into_iter()
            .map(|m| m.record)
            .collect()
    }

    /// All records in key order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Record>> for Directory {
    type Error = BookError;

    /// Adopt a decoded key→record map after checking every key.
    fn try_from(records: BTreeMap<String, Record>) -> BookResult<Self> {
        if let Some((key, record)) = records
            .iter()
            .find(|(key, record)| record.name().as_str() != key.as_str())
        {
            return Err(BookError::KeyMismatch {
                key: key.clone(),
                record: record.name().to_string(),
            });
        }
        Ok(Self { records })
    }
}
