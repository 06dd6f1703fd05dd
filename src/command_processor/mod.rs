use crate::error::{ContactError, ContactResult};
use crate::model::AddressBook;
use log::{debug, info, warn};
use std::fmt::Debug;

pub mod birthday_handler;
pub mod contact_handler;

pub const NAME_NOT_FOUND: &str = "Name not found. Please, check and try again.";
pub const ENTER_CORRECT_INFORMATION: &str = "Enter correct information.";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// A parsed input line: lower-cased command name plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandArgs {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self { command: command.into(), args }
    }

    /// Positional argument `index`, or an arity error naming this command.
    pub fn positional(&self, index: usize) -> ContactResult<&str> {
        self.args.get(index).map(String::as_str).ok_or_else(|| ContactError::Arity {
            command: self.command.clone(),
            expected: index + 1,
            given: self.args.len(),
        })
    }

    pub fn optional(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Standardized input preprocessing function
pub fn preprocess_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Split a line on whitespace. The first token is the command; an empty line
/// yields an empty command that no handler accepts.
pub fn parse_input(line: &str) -> CommandArgs {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().map(preprocess_input).unwrap_or_default();
    let args: Vec<String> = tokens.map(str::to_string).collect();
    debug!("Parsed command: {:?}, args: {:?}", command, args);
    CommandArgs { command, args }
}

/// Outcome of a dispatched command, ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Error(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Error(text) => text,
        }
    }
}

/// Business logic for one or more commands.
///
/// Handlers report failures through `ContactError` and never format them;
/// [`CommandProcessor::execute`] is the only place errors become text.
pub trait CommandHandler: Debug {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String>;
    fn can_handle(&self, command: &str) -> bool;
}

/// Map a handler failure to the text shown to the user.
pub fn user_message(err: &ContactError) -> String {
    match err {
        ContactError::RecordNotFound(_) => NAME_NOT_FOUND.to_string(),
        ContactError::Arity { .. } => ENTER_CORRECT_INFORMATION.to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(contact_handler::ContactHandler),
            Box::new(birthday_handler::BirthdayHandler),
        ];
        Self { handlers }
    }

    pub fn can_handle(&self, command: &str) -> bool {
        self.handlers.iter().any(|h| h.can_handle(command))
    }

    pub fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> Reply {
        let Some(handler) = self.handlers.iter().find(|h| h.can_handle(&args.command)) else {
            warn!("Unrecognized command: {:?}", args.command);
            return Reply::Message(INVALID_COMMAND.to_string());
        };
        info!("Executing command '{}' with arguments: {:?}", args.command, args.args);
        match handler.execute(args, book) {
            Ok(message) => {
                debug!("Command '{}' executed successfully", args.command);
                Reply::Message(message)
            }
            Err(e) => {
                warn!("Command '{}' failed: {:?}", args.command, e);
                Reply::Error(user_message(&e))
            }
        }
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}
