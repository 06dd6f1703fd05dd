//! Presentation boundary.
//!
//! The session loop talks to the user only through [`UserView`], so the
//! console front end can be swapped for any other implementation.

use crate::model::Record;
use anyhow::Result;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub trait UserView {
    fn show_message(&mut self, message: &str);
    fn show_all(&mut self, records: &[&Record]);
    fn show_record(&mut self, record: &Record);
    fn show_error(&mut self, message: &str);
    /// Read one line. `Ok(None)` means the input was closed or interrupted.
    fn prompt_user(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line-editing console front end.
pub struct ConsoleView {
    editor: DefaultEditor,
}

impl ConsoleView {
    pub fn new() -> Result<Self> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl UserView for ConsoleView {
    fn show_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn show_all(&mut self, records: &[&Record]) {
        if records.is_empty() {
            println!("No contacts saved.");
            return;
        }
        for record in records {
            self.show_record(record);
        }
    }

    fn show_record(&mut self, record: &Record) {
        println!("{}", record);
    }

    fn show_error(&mut self, message: &str) {
        println!("Error: {}", message);
    }

    fn prompt_user(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                info!("Input interrupted (CTRL-C)");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                info!("Input closed (CTRL-D)");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
