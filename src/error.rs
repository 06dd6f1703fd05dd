//! Error types for the assistant bot.
//!
//! Model and command failures are recoverable and end up as user-facing text;
//! persistence failures are fatal and abort the process.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed user input rejected by a value object constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone number is not exactly ten digits
    #[error("Invalid phone number '{0}'. Phone number must contain exactly 10 digits.")]
    InvalidPhone(String),

    /// Birthday is not a real date in DD.MM.YYYY form
    #[error("Invalid date '{input}': {reason}. Use DD.MM.YYYY")]
    InvalidBirthday { input: String, reason: String },
}

/// Errors raised by address book operations and command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this name
    #[error("Contact '{0}' not found.")]
    RecordNotFound(String),

    /// The record exists but does not hold this phone
    #[error("Phone {phone} not found for {name}.")]
    PhoneNotFound { name: String, phone: String },

    /// The record exists but has no birthday
    #[error("Birthday is not set for {0}.")]
    BirthdayNotSet(String),

    /// A record with this name is already stored
    #[error("Contact '{0}' already exists.")]
    DuplicateName(String),

    /// Command was given fewer positional arguments than it needs
    #[error("Command '{command}' expects at least {expected} argument(s), got {given}")]
    Arity { command: String, expected: usize, given: usize },
}

/// Errors that can occur while loading or saving the address book file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {} is {size} bytes, which exceeds the allowed size", .path.display())]
    TooLarge { path: PathBuf, size: u64 },

    #[error("Failed to parse {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported address book format version {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid stored contact: {0}")]
    InvalidEntry(String),

    #[error("Could not find home directory")]
    NoHomeDirectory,
}

pub type ContactResult<T> = Result<T, ContactError>;

pub type PersistenceResult<T> = Result<T, PersistenceError>;
