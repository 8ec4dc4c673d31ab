use std::collections::HashMap;

use crate::command::handlers;
use crate::core::address_book::AddressBook;
use crate::core::context::AppContext;
use crate::core::types::CommandKind;
use crate::errors::Result;
use crate::extensions::enums::valid_csv;
use crate::logging::{LogTarget, Logger};

pub type Handler = Box<dyn Fn(&[String], &mut AddressBook) -> Result<String>>;

pub const GOODBYE: &str = "Good bye!";

/// What the REPL should do after a line was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing to print.
    Skip,
    Reply(String),
    Exit(String),
}

/// Splits a line into a lowercased command token and its positional arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

pub fn invalid_command_message() -> String {
    format!(
        "Invalid command. Valid commands: {}",
        valid_csv::<CommandKind>()
    )
}

pub struct CommandRegistry {
    handlers: HashMap<CommandKind, Handler>,
    logger: Logger,
}

impl CommandRegistry {
    pub fn new(logger: Logger, birthday_window_days: u32) -> Self {
        let mut table: HashMap<CommandKind, Handler> = HashMap::new();
        table.insert(CommandKind::Hello, Box::new(handlers::hello));
        table.insert(CommandKind::Help, Box::new(handlers::help));
        table.insert(CommandKind::Add, Box::new(handlers::add_contact));
        table.insert(CommandKind::Change, Box::new(handlers::change_contact));
        table.insert(CommandKind::Phone, Box::new(handlers::show_phone));
        table.insert(CommandKind::All, Box::new(handlers::show_all));
        table.insert(CommandKind::AddBirthday, Box::new(handlers::add_birthday));
        table.insert(CommandKind::ShowBirthday, Box::new(handlers::show_birthday));
        table.insert(
            CommandKind::Birthdays,
            Box::new(move |args: &[String], book: &mut AddressBook| {
                handlers::upcoming_birthdays(args, book, birthday_window_days)
            }),
        );
        Self {
            handlers: table,
            logger,
        }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.logger.clone(), ctx.config.birthday_window_days())
    }

    pub fn handles(&self, kind: CommandKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn dispatch(&self, line: &str, book: &mut AddressBook) -> Outcome {
        let Some((raw_command, args)) = parse_input(line) else {
            return Outcome::Skip;
        };

        let kind = match CommandKind::try_from(&raw_command) {
            Ok(kind) => kind,
            Err(err) => {
                self.logger
                    .warn(format!("Command resolution failed. {err}"), LogTarget::FileOnly);
                return Outcome::Reply(invalid_command_message());
            }
        };

        if kind.is_exit() {
            return Outcome::Exit(GOODBYE.to_string());
        }

        match self.handlers.get(&kind) {
            Some(handler) => Outcome::Reply(self.input_error(kind, handler, &args, book)),
            None => Outcome::Reply(invalid_command_message()),
        }
    }

    /// Runs `handler`, turning any error into an `Error: <message>` reply.
    fn input_error(
        &self,
        kind: CommandKind,
        handler: &Handler,
        args: &[String],
        book: &mut AddressBook,
    ) -> String {
        match handler(args, book) {
            Ok(reply) => reply,
            Err(err) => {
                self.logger.warn(
                    format!("Command execution failed for '{kind}'. {err}"),
                    LogTarget::FileOnly,
                );
                format!("Error: {err}")
            }
        }
    }
}
