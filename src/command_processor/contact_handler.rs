//! Contact command handler
//!
//! Handles `add`, `change`, `phone`, `delete` and `remove-phone`.

use super::{CommandArgs, CommandHandler, INVALID_COMMAND};
use crate::error::{ContactError, ContactResult};
use crate::model::{AddressBook, Phone, Record};
use log::debug;

#[derive(Debug)]
pub struct ContactHandler;

impl CommandHandler for ContactHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
        match args.command.as_str() {
            "add" => add_contact(args, book),
            "change" => change_contact(args, book),
            "phone" => show_phone(args, book),
            "delete" => delete_contact(args, book),
            "remove-phone" => remove_phone(args, book),
            _ => Ok(INVALID_COMMAND.to_string()),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "change" | "phone" | "delete" | "remove-phone")
    }
}

fn find_record<'a>(book: &'a mut AddressBook, name: &str) -> ContactResult<&'a mut Record> {
    book.find_mut(name).ok_or_else(|| ContactError::RecordNotFound(name.to_string()))
}

/// Create the contact if needed, then add the phone when one is given.
///
/// The phone is validated first so a bad number never leaves an empty
/// contact behind.
fn add_contact(args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
    let name = args.positional(0)?;
    let phone = args.optional(1).map(Phone::new).transpose()?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name))?;
        "Contact added."
    };

    if let Some(phone) = phone {
        let record = find_record(book, name)?;
        if !record.insert_phone(phone) {
            debug!("Phone already stored for '{}'", name);
        }
    }
    Ok(message.to_string())
}

fn change_contact(args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
    let name = args.positional(0)?;
    let old_phone = args.positional(1)?;
    let new_phone = args.positional(2)?;
    find_record(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

fn show_phone(args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
    let name = args.positional(0)?;
    let record = find_record(book, name)?;
    if record.phones().is_empty() {
        return Ok(format!("No phone numbers saved for {}.", name));
    }
    Ok(record.phones_line())
}

fn delete_contact(args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
    let name = args.positional(0)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

fn remove_phone(args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
    let name = args.positional(0)?;
    let phone = args.positional(1)?;
    find_record(book, name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}
