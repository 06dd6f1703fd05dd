use assistant_bot::command_processor::{parse_input, CommandProcessor, Reply};
use assistant_bot::AddressBook;
use chrono::{Datelike, NaiveDate, Weekday};
use pretty_assertions::assert_eq;

fn send(processor: &CommandProcessor, book: &mut AddressBook, line: &str) -> Reply {
    processor.execute(&parse_input(line), book)
}

fn message(text: &str) -> Reply {
    Reply::Message(text.to_string())
}

#[test]
fn test_add_update_and_change_phones() {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();

    assert_eq!(send(&processor, &mut book, "add Alice 1234567890"), message("Contact added."));
    assert_eq!(send(&processor, &mut book, "add Alice 0987654321"), message("Contact updated."));
    assert_eq!(send(&processor, &mut book, "phone Alice"), message("1234567890; 0987654321"));

    assert_eq!(
        send(&processor, &mut book, "change Alice 1234567890 1112223333"),
        message("Contact updated.")
    );
    assert_eq!(send(&processor, &mut book, "phone Alice"), message("1112223333; 0987654321"));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_change_unknown_contact() {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    assert_eq!(
        send(&processor, &mut book, "change Bob 1234567890 1112223333"),
        Reply::Error("Name not found. Please, check and try again.".to_string())
    );
}

#[test]
fn test_birthday_round_trip() {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    send(&processor, &mut book, "add Alice 1234567890");
    assert_eq!(send(&processor, &mut book, "add-birthday Alice 01.01.1990"), message("Birthday added."));
    assert_eq!(send(&processor, &mut book, "show-birthday Alice"), message("01.01.1990"));
}

#[test]
fn test_failed_change_keeps_old_phone() {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    send(&processor, &mut book, "add Alice 1234567890");

    let reply = send(&processor, &mut book, "change Alice 1234567890 12345");
    assert!(matches!(reply, Reply::Error(ref text) if text.contains("exactly 10 digits")));
    assert_eq!(send(&processor, &mut book, "phone Alice"), message("1234567890"));
}

#[test]
fn test_wrong_arity_and_bad_input() {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    send(&processor, &mut book, "add Alice");

    for line in ["add", "change Alice", "phone", "add-birthday Alice", "show-birthday"] {
        assert_eq!(
            send(&processor, &mut book, line),
            Reply::Error("Enter correct information.".to_string()),
            "line: {}",
            line
        );
    }

    let reply = send(&processor, &mut book, "add-birthday Alice 31.04.1990");
    assert!(matches!(reply, Reply::Error(ref text) if text.contains("Use DD.MM.YYYY")));

    assert_eq!(
        send(&processor, &mut book, "show-birthday Alice"),
        Reply::Error("Birthday is not set for Alice.".to_string())
    );
    assert_eq!(send(&processor, &mut book, "dance"), message("Invalid command."));
}

#[test]
fn test_upcoming_birthday_on_sunday_moves_to_monday() {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    send(&processor, &mut book, "add Alice 1234567890");
    send(&processor, &mut book, "add-birthday Alice 18.10.1992");
    send(&processor, &mut book, "add Bob 0987654321");
    send(&processor, &mut book, "add-birthday Bob 21.10.1980");

    let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    assert_eq!(friday.weekday(), Weekday::Fri);

    let upcoming = book.upcoming_birthdays(7, friday);
    let rendered: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["Alice: 19.10.2026", "Bob: 21.10.2026"]);
    assert_eq!(upcoming[0].congratulation_date.weekday(), Weekday::Mon);
}
