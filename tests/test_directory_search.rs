//! Directory lookup and search behaviour.

mod fixtures;
use fixtures::*;

use contact_book::{BookError, Directory, MatchType, Name, Record};

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

/// Test name search folds case on both sides.
#[test]
fn test_find_records_is_case_insensitive() {
    let directory = sample_directory();

    assert_eq!(names(&directory.find_records("ann")), vec!["Anna", "HANNA"]);
    assert_eq!(names(&directory.find_records("ANN")), vec!["Anna", "HANNA"]);
    assert!(directory.find_records("bobby").is_empty());
}

/// Test the combined search keeps its substring/exact asymmetry.
#[test]
fn test_find_contact_asymmetry() {
    let directory = sample_directory();

    assert_eq!(names(&directory.find_contact("ob")), vec!["Bob"]);
    assert!(directory.find_contact("345-678").is_empty());
    assert!(directory.find_contact("+12-345-678-90-1").is_empty());
    assert_eq!(names(&directory.find_contact("+12-345-678-90-11")), vec!["Bob"]);

    // Second phone of a record matches too.
    assert_eq!(names(&directory.find_contact("+11-111-111-11-12")), vec!["Anna"]);
}

/// Test the combined search reports which rule matched.
#[test]
fn test_find_contact_match_types() {
    let directory = sample_directory();

    let by_name = directory.find_contact_matches("Ann");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].match_type, MatchType::NameSubstring);

    let by_phone = directory.find_contact_matches("+22-222-222-22-22");
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].match_type, MatchType::ExactPhone);
}

/// Test exact lookup never errors on an absent name.
#[test]
fn test_exact_lookup() {
    let directory = sample_directory();

    assert!(directory.get("Anna").is_some());
    assert!(directory.get("anna").is_none());
    assert!(directory.get("Ann").is_none());
}

/// Test that keys stay equal to record names after mixed writes.
#[test]
fn test_key_invariant_after_writes() {
    let mut directory = Directory::new();
    directory.add_record(record("Bob", &["+12-345-678-90-11"], None, None));
    directory.add_record(record("Bob", &["+99-999-999-99-99"], None, None));
    directory
        .edit_record(
            &Name::new("Bob").unwrap(),
            record("Bob", &["+88-888-888-88-88"], None, None),
        )
        .unwrap();
    let rejected = directory.edit_record(
        &Name::new("Bob").unwrap(),
        record("Robert", &["+77-777-777-77-77"], None, None),
    );
    assert!(matches!(rejected, Err(BookError::KeyMismatch { .. })));
    directory.upsert(record("Ann", &["+11-111-111-11-11"], None, None));
    directory.upsert(record("Ann", &["+11-111-111-11-12"], None, None));

    assert_eq!(directory.len(), 2);
    assert!(!directory.contains("Robert"));
    assert_eq!(directory.get("Ann").unwrap().phones().len(), 2);
    assert_keys_consistent(&directory);
}

/// Test renaming is delete plus add.
#[test]
fn test_rename_by_delete_and_add() {
    let mut directory = sample_directory();

    let old = directory.delete_record(&Name::new("Bob").unwrap()).unwrap();
    let mut renamed = record("Robert", &[], None, None);
    for phone in old.phones() {
        renamed.add_phone(phone.clone());
    }
    directory.add_record(renamed);

    assert!(directory.get("Bob").is_none());
    assert!(directory.get("Robert").unwrap().has_phone("+12-345-678-90-11"));
    assert_keys_consistent(&directory);
}
