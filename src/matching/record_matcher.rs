//! Matching rules used by directory searches.
//!
//! Two rules exist and they are intentionally asymmetric:
//! - names match on a substring (case-insensitive for name search,
//!   case-sensitive for the combined contact search)
//! - phones match only on exact equality, never on a fragment

use crate::models::Record;

/// A record that answered a query, with the rule that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Rule that produced this result
    pub match_type: MatchType,
}

/// The rule that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// The query is a substring of the name
    NameSubstring,

    /// The query equals one of the phone numbers
    ExactPhone,
}

/// Query-bound matcher; folds the query once and reuses it per record.
#[derive(Debug, Clone)]
pub struct RecordMatcher {
    query: String,
    folded: String,
}

impl RecordMatcher {
    /// Create a matcher for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let folded = query.to_lowercase();
        Self { query, folded }
    }

    /// Case-insensitive substring test against a directory key.
    pub fn name_matches(&self, key: &str) -> bool {
        key.to_lowercase().contains(&self.folded)
    }

    /// Combined test: name substring (case-sensitive) or exact phone.
    ///
    /// Name takes precedence when both rules would match.
    pub fn match_contact<'a>(&self, key: &str, record: &'a Record) -> Option<MatchResult<'a>> {
        let match_type = if key.contains(&self.query) {
            MatchType::NameSubstring
        } else if record.has_phone(&self.query) {
            MatchType::ExactPhone
        } else {
            return None;
        };

        Some(MatchResult { record, match_type })
    }
}
