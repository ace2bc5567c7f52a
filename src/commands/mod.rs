//! Line-oriented command layer.
//!
//! Turns one line of user input into a [`Command`] and runs it against a
//! [`ContactService`](crate::services::ContactService).

pub mod handlers;
pub mod parser;

pub use handlers::{dispatch, handle_line, handle_raw_line, Reply, GREETING, HELP};
pub use parser::{Command, CommandKind};
