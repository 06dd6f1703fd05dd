//! A single contact entry.

use super::{Birthday, Phone};
use crate::error::{ContactError, ContactResult};
use std::fmt;

/// One contact: a name, its phones and an optional birthday.
///
/// Phones are kept in insertion order and never contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), phones: Vec::new(), birthday: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it. Adding a number that is already present
    /// is a no-op.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        self.insert_phone(Phone::new(raw)?);
        Ok(())
    }

    /// Append an already validated phone. Returns `false` if it was present.
    pub fn insert_phone(&mut self, phone: Phone) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Replace `old` with `new` in place.
    ///
    /// The record is left untouched on any failure. If `new` is already held
    /// under another position, `old` is simply dropped so the set stays unique.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self.position(old).ok_or_else(|| self.phone_not_found(old))?;
        let replacement = Phone::new(new)?;
        if replacement.as_str() == old {
            return Ok(());
        }
        if self.phones.contains(&replacement) {
            self.phones.remove(index);
        } else {
            self.phones[index] = replacement;
        }
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Remove `raw` from the record.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if the record does not hold it.
    pub fn remove_phone(&mut self, raw: &str) -> ContactResult<Phone> {
        let index = self.position(raw).ok_or_else(|| self.phone_not_found(raw))?;
        Ok(self.phones.remove(index))
    }

    /// Validate and store the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_line(&self) -> String {
        self.phones.iter().map(Phone::as_str).collect::<Vec<_>>().join("; ")
    }

    fn position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }

    fn phone_not_found(&self, raw: &str) -> ContactError {
        ContactError::PhoneNotFound { name: self.name.clone(), phone: raw.to_string() }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phones_line())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
