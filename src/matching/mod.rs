//! Search predicates for contact lookup.
//!
//! This module decides whether a stored record answers a query, either by
//! a substring of its name or by an exact phone number.

pub mod record_matcher;

pub use record_matcher::{MatchResult, MatchType, RecordMatcher};
