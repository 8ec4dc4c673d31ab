use crate::errors::{Error, Result};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum CommandKind {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Close,
    Exit,
}

impl CommandKind {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::unknown(s.trim()))
    }

    /// `close` and `exit` end the session instead of running a handler.
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandKind::Close | CommandKind::Exit)
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Hello => "hello",
            CommandKind::Help => "help",
            CommandKind::Add => "add <name> <phone>",
            CommandKind::Change => "change <name> <old_phone> <new_phone>",
            CommandKind::Phone => "phone <name>",
            CommandKind::All => "all",
            CommandKind::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            CommandKind::ShowBirthday => "show-birthday <name>",
            CommandKind::Birthdays => "birthdays [days]",
            CommandKind::Close => "close",
            CommandKind::Exit => "exit",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CommandKind::Hello => "Greet the assistant.",
            CommandKind::Help => "List the available commands.",
            CommandKind::Add => "Add a contact, or append a phone to an existing one.",
            CommandKind::Change => "Replace one of a contact's phone numbers.",
            CommandKind::Phone => "Show a contact's phone numbers.",
            CommandKind::All => "Show every contact with its phone numbers.",
            CommandKind::AddBirthday => "Set a contact's birthday.",
            CommandKind::ShowBirthday => "Show a contact's birthday.",
            CommandKind::Birthdays => "List birthdays coming up within the window.",
            CommandKind::Close | CommandKind::Exit => "Leave the assistant.",
        }
    }
}
