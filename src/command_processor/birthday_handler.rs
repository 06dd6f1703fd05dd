//! Birthday command handler
//!
//! Handles `add-birthday` and `show-birthday`. The upcoming-birthdays listing
//! is a control command owned by the session loop.

use super::{CommandArgs, CommandHandler, INVALID_COMMAND};
use crate::error::{ContactError, ContactResult};
use crate::model::AddressBook;

#[derive(Debug)]
pub struct BirthdayHandler;

impl CommandHandler for BirthdayHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> ContactResult<String> {
        match args.command.as_str() {
            "add-birthday" => {
                let name = args.positional(0)?;
                let date = args.positional(1)?;
                book.find_mut(name)
                    .ok_or_else(|| ContactError::RecordNotFound(name.to_string()))?
                    .set_birthday(date)?;
                Ok("Birthday added.".to_string())
            }
            "show-birthday" => {
                let name = args.positional(0)?;
                let record = book
                    .find(name)
                    .ok_or_else(|| ContactError::RecordNotFound(name.to_string()))?;
                record
                    .birthday()
                    .map(ToString::to_string)
                    .ok_or_else(|| ContactError::BirthdayNotSet(name.to_string()))
            }
            _ => Ok(INVALID_COMMAND.to_string()),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "add-birthday" || command == "show-birthday"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_processor::parse_input;
    use crate::model::Record;

    fn run(book: &mut AddressBook, line: &str) -> ContactResult<String> {
        BirthdayHandler.execute(&parse_input(line), book)
    }

    fn book_with_alice() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice")).unwrap();
        book
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = book_with_alice();
        assert_eq!(run(&mut book, "add-birthday Alice 01.01.1990").unwrap(), "Birthday added.");
        assert_eq!(run(&mut book, "show-birthday Alice").unwrap(), "01.01.1990");
    }

    #[test]
    fn test_show_birthday_when_unset() {
        let mut book = book_with_alice();
        assert_eq!(
            run(&mut book, "show-birthday Alice"),
            Err(ContactError::BirthdayNotSet("Alice".into()))
        );
    }

    #[test]
    fn test_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add-birthday Bob 01.01.1990"),
            Err(ContactError::RecordNotFound("Bob".into()))
        );
        assert_eq!(run(&mut book, "show-birthday Bob"), Err(ContactError::RecordNotFound("Bob".into())));
    }

    #[test]
    fn test_invalid_birthday_keeps_previous() {
        let mut book = book_with_alice();
        run(&mut book, "add-birthday Alice 01.01.1990").unwrap();
        assert!(matches!(
            run(&mut book, "add-birthday Alice 31.04.1990"),
            Err(ContactError::Validation(_))
        ));
        assert_eq!(run(&mut book, "show-birthday Alice").unwrap(), "01.01.1990");
    }

    #[test]
    fn test_missing_date_is_arity_error() {
        let mut book = book_with_alice();
        assert!(matches!(run(&mut book, "add-birthday Alice"), Err(ContactError::Arity { .. })));
    }
}
