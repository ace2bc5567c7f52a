//! Command handlers.
//!
//! Routes a parsed [`Command`] to the matching service entry point and
//! folds every failure into a one-line reply. Nothing here panics or exits.

use super::parser::{Command, CommandKind};
use crate::error::BookResult;
use crate::models::Record;
use crate::services::ContactService;
use tracing::warn;

pub const GREETING: &str = "Hello, I'm your contact book. Type 'help' to see what I can do.";

pub const HELP: &str = "\
Available commands:
  add <name> <phone> [email] [birthday]  add a contact or extend an existing one
                                         phone format: +xx-xxx-xxx-xx-xx, birthday: dd-mm-yyyy
  find <name>                            find contacts whose name contains the text
  search <text>                          find by part of a name or by a full phone number
  update <name> <phone> [email]          replace the first phone (creates the contact if absent)
  show                                   list all contacts
  dtb <name>                             days until the contact's next birthday
  birthday <name> <dd-mm-yyyy>           set a contact's birthday
  remove-phone <name> <index>            remove a phone by position, starting at 0
  delete <name>                          delete a contact
  save [path] / load [path]              binary snapshot, default data.bin
  export <path> / import <path>          JSON file
  exit | bye | close                     quit";

/// What the caller should do with a handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text.
    Text(String),
    /// Print these records, one per line.
    Records(Vec<Record>),
    /// End the session.
    Exit,
}

/// Run a command against the service.
pub fn dispatch(service: &mut ContactService, command: &Command) -> Reply {
    let args = command.arg_slices();

    let result: BookResult<String> = match command.kind {
        CommandKind::Hello => Ok(GREETING.to_string()),
        CommandKind::Help => Ok(HELP.to_string()),
        CommandKind::Add => service.add_contact(&args),
        CommandKind::Find => service.find(&args),
        CommandKind::Search => service.search(&args),
        CommandKind::Update => service.update_contact(&args),
        CommandKind::Show => match service.show_all(&args) {
            Ok(records) => return Reply::Records(records.into_iter().cloned().collect()),
            Err(e) => Err(e),
        },
        CommandKind::DaysToBirthday => service.days_to_birthday(&args),
        CommandKind::Delete => service.delete_contact(&args),
        CommandKind::RemovePhone => service.remove_phone(&args),
        CommandKind::Birthday => service.set_birthday(&args),
        CommandKind::Save => service.save(&args),
        CommandKind::Load => service.load(&args),
        CommandKind::Export => service.export(&args),
        CommandKind::Import => service.import(&args),
        CommandKind::Exit => return Reply::Exit,
    };

    match result {
        Ok(text) => Reply::Text(text),
        Err(e) => {
            warn!(command = ?command.kind, error = %e, "Command failed");
            Reply::Text(e.to_string())
        }
    }
}

/// Parse and run one line.
pub fn handle_line(service: &mut ContactService, line: &str) -> Reply {
    match Command::parse(line) {
        Ok(command) => dispatch(service, &command),
        Err(e) => Reply::Text(e.to_string()),
    }
}

/// Parse and run one line of raw input.
///
/// Invalid UTF-8 is replaced rather than rejected, so a stray byte gets a
/// reply instead of ending the session. Blank lines yield `None`.
pub fn handle_raw_line(service: &mut ContactService, raw: &[u8]) -> Option<Reply> {
    let line = String::from_utf8_lossy(raw);
    if line.trim().is_empty() {
        return None;
    }
    Some(handle_line(service, &line))
}
