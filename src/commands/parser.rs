//! Command line parsing.

use crate::error::{BookError, BookResult};

/// The operation a line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Help,
    Add,
    Find,
    Search,
    Update,
    Show,
    DaysToBirthday,
    Delete,
    RemovePhone,
    Birthday,
    Save,
    Load,
    Export,
    Import,
    Exit,
}

impl CommandKind {
    fn from_verb(verb: &str) -> Option<Self> {
        let kind = match verb {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "add" => Self::Add,
            "find" => Self::Find,
            "search" => Self::Search,
            "update" => Self::Update,
            "show" => Self::Show,
            "dtb" => Self::DaysToBirthday,
            "delete" => Self::Delete,
            "remove-phone" => Self::RemovePhone,
            "birthday" => Self::Birthday,
            "save" => Self::Save,
            "load" => Self::Load,
            "export" => Self::Export,
            "import" => Self::Import,
            "exit" | "bye" | "close" => Self::Exit,
            _ => return None,
        };
        Some(kind)
    }
}

/// A parsed line: the operation and its whitespace-separated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub args: Vec<String>,
}

impl Command {
    /// Parse one input line.
    ///
    /// The verb is matched case-insensitively; arguments are kept verbatim.
    pub fn parse(line: &str) -> BookResult<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or(BookError::EmptyCommand)?;

        let kind = CommandKind::from_verb(&verb.to_lowercase())
            .ok_or_else(|| BookError::UnknownCommand(verb.to_string()))?;

        Ok(Self {
            kind,
            args: parts.map(str::to_string).collect(),
        })
    }

    /// Arguments as string slices, the shape service entry points take.
    pub fn arg_slices(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}
