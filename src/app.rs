use crate::command_processor::{parse_input, CommandArgs, CommandProcessor, Reply};
use crate::model::{AddressBook, Record, DEFAULT_WINDOW_DAYS};
use crate::view::UserView;
use anyhow::Result;
use chrono::{Local, NaiveDate};

pub const PROMPT: &str = "Enter a command: ";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive session: reads lines, runs control commands itself and
/// hands everything else to the [`CommandProcessor`].
#[derive(Debug)]
pub struct Application {
    command_processor: CommandProcessor,
    window_days: u32,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Application {
    pub fn new(window_days: u32) -> Self {
        Self { command_processor: CommandProcessor::new(), window_days, today: local_today }
    }

    /// Replace the clock used as the reference date for `birthdays`.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until `close`/`exit` or until the view reports closed input.
    /// Persisting the book afterwards is the caller's job.
    pub fn run(&self, book: &mut AddressBook, view: &mut dyn UserView) -> Result<()> {
        log::info!("Starting assistant session with {} contact(s)", book.len());
        view.show_message("Welcome to the assistant bot!");

        while let Some(line) = view.prompt_user(PROMPT)? {
            if self.process_input(&line, book, view) == Flow::Exit {
                return Ok(());
            }
        }
        log::info!("Input closed, ending session");
        Ok(())
    }

    pub fn process_input(&self, input: &str, book: &mut AddressBook, view: &mut dyn UserView) -> Flow {
        let args = parse_input(input);
        match args.command.as_str() {
            "close" | "exit" => {
                log::info!("Exit command received");
                view.show_message("Good bye!");
                return Flow::Exit;
            }
            "hello" => view.show_message("How can I help you?"),
            "help" => view.show_message(HELP_TEXT),
            "all" => {
                let records: Vec<&Record> = book.records().collect();
                view.show_all(&records);
            }
            "birthdays" => self.show_upcoming_birthdays(book, view),
            _ => self.dispatch(&args, book, view),
        }
        Flow::Continue
    }

    fn dispatch(&self, args: &CommandArgs, book: &mut AddressBook, view: &mut dyn UserView) {
        match self.command_processor.execute(args, book) {
            Reply::Message(text) => view.show_message(&text),
            Reply::Error(text) => view.show_error(&text),
        }
    }

    fn show_upcoming_birthdays(&self, book: &AddressBook, view: &mut dyn UserView) {
        let upcoming = book.upcoming_birthdays(self.window_days, (self.today)());
        if upcoming.is_empty() {
            view.show_message("There are no upcoming birthdays.");
            return;
        }
        for birthday in upcoming {
            view.show_message(&birthday.to_string());
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

const HELP_TEXT: &str = "Available commands:
  hello                              Greeting
  add <name> [phone]                 Add a contact or a phone to it
  change <name> <old> <new>          Replace a phone
  phone <name>                       Show a contact's phones
  remove-phone <name> <phone>        Remove a phone
  delete <name>                      Delete a contact
  all                                Show all contacts
  add-birthday <name> <DD.MM.YYYY>   Set a birthday
  show-birthday <name>               Show a birthday
  birthdays                          Upcoming birthdays
  close, exit                        Save and quit";
