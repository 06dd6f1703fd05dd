//! Phone value object.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// A phone number that is guaranteed to be exactly ten ASCII digits.
///
/// Phones are immutable; editing a contact's phone replaces the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Validate `raw` and wrap it. No reformatting is applied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless `raw` is exactly ten digits.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !PHONE_RE.is_match(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
