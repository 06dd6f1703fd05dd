use crate::error::{PersistenceError, PersistenceResult};
use crate::model::{AddressBook, Record};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const STATE_DIR: &str = ".assistant-bot";
const BOOK_FILE: &str = "addressbook.json";
/// Version written into every saved file.
pub const FORMAT_VERSION: u32 = 1;
// Maximum allowed size for the state file (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// On-disk form of the whole address book.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoredBook {
    pub version: u32,
    pub contacts: Vec<StoredContact>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoredContact {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl From<&AddressBook> for StoredBook {
    fn from(book: &AddressBook) -> Self {
        let contacts = book
            .records()
            .map(|record| StoredContact {
                name: record.name().to_string(),
                phones: record.phones().iter().map(ToString::to_string).collect(),
                birthday: record.birthday().map(ToString::to_string),
            })
            .collect();
        Self { version: FORMAT_VERSION, contacts }
    }
}

impl TryFrom<StoredBook> for AddressBook {
    type Error = PersistenceError;

    /// Rebuild the book through the model constructors so stored data obeys
    /// the same validation as user input.
    fn try_from(stored: StoredBook) -> Result<Self, Self::Error> {
        if stored.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(stored.version));
        }
        let mut book = AddressBook::new();
        for contact in stored.contacts {
            let invalid = |e: &dyn std::fmt::Display| {
                PersistenceError::InvalidEntry(format!("{}: {}", contact.name, e))
            };
            let mut record = Record::new(contact.name.as_str());
            for phone in &contact.phones {
                record.add_phone(phone).map_err(|e| invalid(&e))?;
            }
            if let Some(birthday) = &contact.birthday {
                record.set_birthday(birthday).map_err(|e| invalid(&e))?;
            }
            book.add_record(record).map_err(|e| invalid(&e))?;
        }
        Ok(book)
    }
}

/// Loads and saves the address book as one JSON file.
#[derive(Debug, Clone)]
pub struct StateManager {
    path: PathBuf,
}

impl StateManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.assistant-bot/addressbook.json`
    pub fn default_path() -> PersistenceResult<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(PersistenceError::NoHomeDirectory)?;
        Ok(home_dir.join(STATE_DIR).join(BOOK_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole book. A missing file yields an empty book.
    pub fn load(&self) -> PersistenceResult<AddressBook> {
        if !self.path.exists() {
            info!("No address book at {}, starting empty", self.path.display());
            return Ok(AddressBook::new());
        }

        let metadata = std::fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(PersistenceError::TooLarge { path: self.path.clone(), size: metadata.len() });
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let stored: StoredBook = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| PersistenceError::Malformed { path: self.path.clone(), source })?;
        let book = AddressBook::try_from(stored)?;
        info!("Loaded {} contact(s) from {}", book.len(), self.path.display());
        Ok(book)
    }

    /// Write the whole book atomically: a temp file in the same directory is
    /// renamed over the destination.
    pub fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &StoredBook::from(book))
                .map_err(|source| PersistenceError::Malformed { path: self.path.clone(), source })?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        debug!("Saved {} contact(s) to {}", book.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io { path: self.path.clone(), source }
    }
}
