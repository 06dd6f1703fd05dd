//! Birthday value object.

use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Textual form used for input, display and storage.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date regex"));

/// A calendar date entered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the shape is wrong or the
    /// date does not exist (e.g. `31.04.2020`). For impossible dates the reason
    /// is chrono's own parse error.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_RE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday {
                input: raw.to_string(),
                reason: "expected format DD.MM.YYYY".to_string(),
            });
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map(Self).map_err(|e| {
            ValidationError::InvalidBirthday { input: raw.to_string(), reason: e.to_string() }
        })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is celebrated in `year`.
    ///
    /// A 29 February birthday falls back to 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
