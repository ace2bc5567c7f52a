//! Contact service layer.
//!
//! Argument checking, field construction and reply wording for every
//! contact operation.

use crate::config::Config;
use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::persistence::{self, DirectoryCodec, LoadOutcome, StorageFormat};
use crate::repositories::{Directory, UpsertOutcome};
use std::path::{Path, PathBuf};
use tracing::info;

/// Usage strings shown when a command gets the wrong arguments.
pub mod usage {
    pub const ADD: &str = "add <name> <phone> [email] [birthday dd-mm-yyyy]";
    pub const FIND: &str = "find <name>";
    pub const SEARCH: &str = "search <name part or phone>";
    pub const UPDATE: &str = "update <name> <phone> [email]";
    pub const SHOW: &str = "show";
    pub const DAYS_TO_BIRTHDAY: &str = "dtb <name>";
    pub const DELETE: &str = "delete <name>";
    pub const REMOVE_PHONE: &str = "remove-phone <name> <index>";
    pub const BIRTHDAY: &str = "birthday <name> <dd-mm-yyyy>";
    pub const SAVE: &str = "save [path]";
    pub const LOAD: &str = "load [path]";
    pub const EXPORT: &str = "export <path>";
    pub const IMPORT: &str = "import <path>";
}

/// One session's contact book.
#[derive(Debug)]
pub struct ContactService {
    directory: Directory,
    snapshot_path: PathBuf,
}

impl ContactService {
    /// Create a service with an empty directory.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            directory: Directory::new(),
            snapshot_path: snapshot_path.into(),
        }
    }

    /// Create a service using the configured snapshot path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.snapshot_path.clone())
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Check the argument count before any field is built.
    fn check_args(
        args: &[&str],
        min: usize,
        max: usize,
        command: &'static str,
        usage: &'static str,
    ) -> BookResult<()> {
        if args.len() < min || args.len() > max {
            return Err(BookError::BadArguments { command, usage });
        }
        Ok(())
    }

    fn existing_mut(&mut self, name: &Name) -> BookResult<&mut Record> {
        self.directory
            .get_mut(name.as_str())
            .ok_or_else(|| BookError::KeyNotFound(name.to_string()))
    }

    fn render(records: &[&Record]) -> String {
        records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create a contact or extend an existing one.
    ///
    /// An existing contact gets the phone appended and its email/birthday
    /// replaced when given.
    pub fn add_contact(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 2, 4, "add", usage::ADD)?;

        let name = Name::new(args[0])?;
        let phone = Phone::new(args[1])?;
        let mail = args.get(2).map(|m| Email::new(*m)).transpose()?;
        let birthday = args.get(3).map(Birthday::new).transpose()?;

        let mut record = Record::with_phone(name.clone(), phone.clone());
        if let Some(mail) = mail {
            record.set_mail(mail);
        }
        if let Some(birthday) = birthday {
            record.set_birthday(birthday);
        }

        let outcome = self.directory.upsert(record);
        info!(name = %name, outcome = ?outcome, "Contact added");

        Ok(match outcome {
            UpsertOutcome::Created => {
                format!("Contact {} with phone number {} added successfully", name, phone)
            }
            UpsertOutcome::Merged => {
                format!("Contact {} updated, phone number {} added", name, phone)
            }
        })
    }

    /// Case-insensitive name search.
    pub fn find(&self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 1, 1, "find", usage::FIND)?;
        let query = Name::new(args[0])?;

        let found = self.directory.find_records(query.as_str());
        if found.is_empty() {
            return Ok(format!("No records found for {}", query));
        }
        Ok(Self::render(&found))
    }

    /// Name fragment or exact phone search.
    pub fn search(&self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 1, 1, "search", usage::SEARCH)?;

        let found = self.directory.find_contact(args[0]);
        if found.is_empty() {
            return Ok("No contacts found.".to_string());
        }
        Ok(Self::render(&found))
    }

    /// Replace the first phone (and optionally the email) of a contact,
    /// creating the contact if it does not exist.
    pub fn update_contact(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 2, 3, "update", usage::UPDATE)?;

        let name = Name::new(args[0])?;
        let phone = Phone::new(args[1])?;
        let mail = args.get(2).map(|m| Email::new(*m)).transpose()?;

        if let Some(record) = self.directory.get_mut(name.as_str()) {
            if record.phones().is_empty() {
                record.add_phone(phone.clone());
            } else {
                record.edit_phone(0, phone.clone())?;
            }
            let reply = match mail {
                Some(mail) => {
                    let reply = format!(
                        "Updated phone number and email for {} to {} and {}",
                        name, phone, mail
                    );
                    record.set_mail(mail);
                    reply
                }
                None => format!("Updated phone number for {} to {}", name, phone),
            };
            info!(name = %name, "Contact updated");
            return Ok(reply);
        }

        let mut record = Record::with_phone(name.clone(), phone.clone());
        if let Some(mail) = mail {
            record.set_mail(mail);
        }
        self.directory.add_record(record);
        info!(name = %name, "Contact created by update");
        Ok(format!("Added {} with phone number {}", name, phone))
    }

    /// Every contact in name order.
    pub fn show_all(&self, args: &[&str]) -> BookResult<Vec<&Record>> {
        Self::check_args(args, 0, 0, "show", usage::SHOW)?;
        Ok(self.directory.records().collect())
    }

    /// Days until the contact's next birthday.
    pub fn days_to_birthday(&self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 1, 1, "dtb", usage::DAYS_TO_BIRTHDAY)?;
        let name = Name::new(args[0])?;

        let record = self
            .directory
            .get(name.as_str())
            .ok_or_else(|| BookError::KeyNotFound(name.to_string()))?;

        Ok(match record.days_to_next_birthday() {
            Some(0) => format!("{}'s birthday is today", name),
            Some(days) => format!("{} days until {}'s birthday", days, name),
            None => format!("{} does not have a birthday set", name),
        })
    }

    pub fn delete_contact(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 1, 1, "delete", usage::DELETE)?;
        let name = Name::new(args[0])?;

        self.directory.delete_record(&name)?;
        info!(name = %name, "Contact deleted");
        Ok(format!("Contact {} deleted", name))
    }

    /// Remove one phone by its zero-based position.
    pub fn remove_phone(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 2, 2, "remove-phone", usage::REMOVE_PHONE)?;
        let name = Name::new(args[0])?;
        let index: usize = args[1].parse().map_err(|_| BookError::BadArguments {
            command: "remove-phone",
            usage: usage::REMOVE_PHONE,
        })?;

        let removed = self.existing_mut(&name)?.delete_phone(index)?;
        info!(name = %name, index, "Phone removed");
        Ok(format!("Phone {} removed from {}", removed, name))
    }

    pub fn set_birthday(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 2, 2, "birthday", usage::BIRTHDAY)?;
        let name = Name::new(args[0])?;
        let birthday = Birthday::new(args[1])?;

        self.existing_mut(&name)?.set_birthday(birthday);
        info!(name = %name, "Birthday set");
        Ok(format!("Birthday of {} set to {}", name, birthday))
    }

    /// Write the binary snapshot, to the default path unless one is given.
    pub fn save(&self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 0, 1, "save", usage::SAVE)?;
        let path = self.resolve_path(args);
        self.write_to(&path, StorageFormat::Binary.codec())
    }

    /// Read the binary snapshot, from the default path unless one is given.
    pub fn load(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 0, 1, "load", usage::LOAD)?;
        let path = self.resolve_path(args);
        self.read_from(&path, StorageFormat::Binary.codec())
    }

    /// Write the directory as JSON.
    pub fn export(&self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 1, 1, "export", usage::EXPORT)?;
        self.write_to(Path::new(args[0]), StorageFormat::Json.codec())
    }

    /// Replace the directory with the content of a JSON file.
    pub fn import(&mut self, args: &[&str]) -> BookResult<String> {
        Self::check_args(args, 1, 1, "import", usage::IMPORT)?;
        self.read_from(Path::new(args[0]), StorageFormat::Json.codec())
    }

    fn resolve_path(&self, args: &[&str]) -> PathBuf {
        args.first()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.snapshot_path.clone())
    }

    fn write_to(&self, path: &Path, codec: &dyn DirectoryCodec) -> BookResult<String> {
        let count = persistence::save(&self.directory, path, codec)?;
        Ok(format!(
            "Address book saved to {} ({} contacts)",
            path.display(),
            count
        ))
    }

    /// A missing file leaves the current contacts untouched.
    fn read_from(&mut self, path: &Path, codec: &dyn DirectoryCodec) -> BookResult<String> {
        match persistence::load(path, codec)? {
            LoadOutcome::Loaded(directory) => {
                self.directory = directory;
                Ok(format!(
                    "Address book loaded from {} ({} contacts)",
                    path.display(),
                    self.directory.len()
                ))
            }
            LoadOutcome::Missing => Ok(format!(
                "No file with contacts at {}, keeping current contacts",
                path.display()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn service() -> ContactService {
        ContactService::new("unused.bin")
    }

    #[test]
    fn test_add_contact_reports_created_and_merged() {
        let mut svc = service();
        let reply = svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();
        assert_eq!(
            reply,
            "Contact Bob with phone number +12-345-678-90-11 added successfully"
        );

        let reply = svc
            .add_contact(&["Bob", "+22-222-222-22-22", "bob@example.com", "15-06-1990"])
            .unwrap();
        assert!(reply.contains("updated"));

        let bob = svc.directory().get("Bob").unwrap();
        assert_eq!(bob.phones().len(), 2);
        assert_eq!(bob.mail().unwrap().as_str(), "bob@example.com");
        assert_eq!(bob.birthday().unwrap().to_string(), "15-06-1990");
    }

    #[test]
    fn test_add_contact_argument_count() {
        let mut svc = service();
        assert!(matches!(
            svc.add_contact(&["Bob"]),
            Err(BookError::BadArguments { command: "add", .. })
        ));
        assert!(matches!(
            svc.add_contact(&["Bob", "+12-345-678-90-11", "a", "01-01-2000", "extra"]),
            Err(BookError::BadArguments { .. })
        ));
        assert!(svc.directory().is_empty());
    }

    #[test]
    fn test_add_contact_invalid_birthday_adds_nothing() {
        let mut svc = service();
        let err = svc
            .add_contact(&["Bob", "+12-345-678-90-11", "bob@example.com", "31-04-1990"])
            .unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::InvalidBirthday(_))
        ));
        assert!(svc.directory().is_empty());
    }

    #[test]
    fn test_update_existing_replaces_first_phone() {
        let mut svc = service();
        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();
        svc.add_contact(&["Bob", "+22-222-222-22-22"]).unwrap();

        let reply = svc
            .update_contact(&["Bob", "+99-999-999-99-99", "bob@example.com"])
            .unwrap();
        assert!(reply.starts_with("Updated phone number and email for Bob"));

        let bob = svc.directory().get("Bob").unwrap();
        assert_eq!(bob.phones()[0].as_str(), "+99-999-999-99-99");
        assert_eq!(bob.phones()[1].as_str(), "+22-222-222-22-22");
        assert_eq!(bob.mail().unwrap().as_str(), "bob@example.com");
    }

    #[test]
    fn test_update_absent_creates() {
        let mut svc = service();
        let reply = svc.update_contact(&["Ann", "+11-111-111-11-11"]).unwrap();
        assert_eq!(reply, "Added Ann with phone number +11-111-111-11-11");
        assert!(svc.directory().contains("Ann"));
    }

    #[test]
    fn test_update_validates_phone_for_existing_contact() {
        let mut svc = service();
        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();
        assert!(svc.update_contact(&["Bob", "12345"]).is_err());
        assert!(svc.directory().get("Bob").unwrap().has_phone("+12-345-678-90-11"));
    }

    #[test]
    fn test_find_and_search_replies() {
        let mut svc = service();
        svc.add_contact(&["Anna", "+11-111-111-11-11"]).unwrap();
        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();

        assert_eq!(svc.find(&["ANN"]).unwrap(), "Anna: +11-111-111-11-11 | - | -");
        assert_eq!(svc.find(&["zed"]).unwrap(), "No records found for zed");

        assert_eq!(
            svc.search(&["+12-345-678-90-11"]).unwrap(),
            "Bob: +12-345-678-90-11 | - | -"
        );
        assert_eq!(svc.search(&["345-678"]).unwrap(), "No contacts found.");
    }

    #[test]
    fn test_show_all_is_structured() {
        let mut svc = service();
        assert!(svc.show_all(&[]).unwrap().is_empty());
        assert!(matches!(
            svc.show_all(&["extra"]),
            Err(BookError::BadArguments { command: "show", .. })
        ));
        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();
        svc.add_contact(&["Anna", "+11-111-111-11-11"]).unwrap();

        let names: Vec<&str> = svc.show_all(&[]).unwrap().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna", "Bob"]);
    }

    #[test]
    fn test_days_to_birthday_replies() {
        let mut svc = service();
        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();
        assert_eq!(
            svc.days_to_birthday(&["Bob"]).unwrap(),
            "Bob does not have a birthday set"
        );
        assert!(matches!(
            svc.days_to_birthday(&["Nobody"]),
            Err(BookError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut svc = service();
        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();

        assert!(matches!(
            svc.remove_phone(&["Bob", "one"]),
            Err(BookError::BadArguments { .. })
        ));
        assert!(matches!(
            svc.remove_phone(&["Bob", "5"]),
            Err(BookError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(
            svc.remove_phone(&["Bob", "0"]).unwrap(),
            "Phone +12-345-678-90-11 removed from Bob"
        );

        assert_eq!(svc.delete_contact(&["Bob"]).unwrap(), "Contact Bob deleted");
        assert!(matches!(
            svc.delete_contact(&["Bob"]),
            Err(BookError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_set_birthday_requires_existing_contact() {
        let mut svc = service();
        assert!(matches!(
            svc.set_birthday(&["Bob", "15-06-1990"]),
            Err(BookError::KeyNotFound(_))
        ));

        svc.add_contact(&["Bob", "+12-345-678-90-11"]).unwrap();
        assert_eq!(
            svc.set_birthday(&["Bob", "15-06-1990"]).unwrap(),
            "Birthday of Bob set to 15-06-1990"
        );
    }

    #[test]
    fn test_export_requires_path() {
        assert!(matches!(
            service().export(&[]),
            Err(BookError::BadArguments { command: "export", .. })
        ));
    }
}
