//! Shared test data for integration tests.

#![allow(dead_code)]

use contact_book::{Birthday, Directory, Email, Name, Phone, Record};

/// Build a record from raw strings, panicking on invalid input.
pub fn record(name: &str, phones: &[&str], mail: Option<&str>, birthday: Option<&str>) -> Record {
    let mut record = Record::new(Name::new(name).expect("valid name"));
    for phone in phones {
        record.add_phone(Phone::new(*phone).expect("valid phone"));
    }
    if let Some(mail) = mail {
        record.set_mail(Email::new(mail).expect("valid email"));
    }
    if let Some(birthday) = birthday {
        record.set_birthday(Birthday::new(birthday).expect("valid birthday"));
    }
    record
}

/// A small directory covering every optional field combination.
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory.add_record(record(
        "Anna",
        &["+11-111-111-11-11", "+11-111-111-11-12"],
        Some("anna@example.com"),
        Some("15-06-1990"),
    ));
    directory.add_record(record("HANNA", &["+22-222-222-22-22"], None, Some("29-02-1996")));
    directory.add_record(record("Bob", &["+12-345-678-90-11"], Some("bob@example.com"), None));
    directory.add_record(record("Zed", &[], None, None));
    directory
}

/// Assert every key holds a record with that same name.
pub fn assert_keys_consistent(directory: &Directory) {
    for record in directory.records() {
        let stored = directory
            .get(record.name().as_str())
            .expect("record reachable by its own name");
        assert_eq!(stored, record);
    }
}
