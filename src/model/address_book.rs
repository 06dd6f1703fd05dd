//! The keyed collection of contacts for one session.

use super::birthday::DATE_FORMAT;
use super::Record;
use crate::error::{ContactError, ContactResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// Default look-ahead for [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A birthday that should be congratulated soon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Weekend-adjusted date on which to congratulate.
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date.format(DATE_FORMAT))
    }
}

/// Records keyed by name. Every key equals its record's name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::DuplicateName` if the name is taken.
    pub fn add_record(&mut self, record: Record) -> ContactResult<()> {
        if self.records.contains_key(record.name()) {
            return Err(ContactError::DuplicateName(record.name().to_string()));
        }
        debug!("Adding record '{}'", record.name());
        self.records.insert(record.name().to_string(), record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record called `name`.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        self.records.remove(name).ok_or_else(|| ContactError::RecordNotFound(name.to_string()))
    }

    /// All records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays occurring in `[reference, reference + within_days)`.
    ///
    /// A birthday already past this year is looked up next year. Dates that
    /// land on a weekend are moved to the following Monday. The result is
    /// sorted by congratulation date, then by name.
    pub fn upcoming_birthdays(&self, within_days: u32, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut occurrence = birthday.anniversary_in(reference.year())?;
                if occurrence < reference {
                    occurrence = birthday.anniversary_in(reference.year() + 1)?;
                }
                if (occurrence - reference).num_days() >= i64::from(within_days) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: skip_weekend(occurrence),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date.cmp(&b.congratulation_date).then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

fn skip_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with(birthdays: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in birthdays {
            let mut record = Record::new(*name);
            record.set_birthday(birthday).unwrap();
            book.add_record(record).unwrap();
        }
        book
    }

    #[test]
    fn test_add_find_delete() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice")).unwrap();
        assert_eq!(book.find("Alice").map(Record::name), Some("Alice"));
        assert!(book.find("alice").is_none());

        let err = book.add_record(Record::new("Alice")).unwrap_err();
        assert_eq!(err, ContactError::DuplicateName("Alice".to_string()));
        assert_eq!(book.len(), 1);

        assert_eq!(book.delete("Alice").unwrap().name(), "Alice");
        assert!(book.is_empty());
        assert_eq!(book.delete("Alice"), Err(ContactError::RecordNotFound("Alice".to_string())));
    }

    #[test]
    fn test_records_are_name_ordered() {
        let mut book = AddressBook::new();
        for name in ["Carol", "Alice", "Bob"] {
            book.add_record(Record::new(name)).unwrap();
        }
        let names: Vec<_> = book.records().map(Record::name).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_sunday_birthday_moves_to_monday() {
        // 16.10.2026 is a Friday, 18.10.2026 a Sunday
        let book = book_with(&[("Alice", "18.10.1990")]);
        let upcoming = book.upcoming_birthdays(DEFAULT_WINDOW_DAYS, date(2026, 10, 16));
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday { name: "Alice".into(), congratulation_date: date(2026, 10, 19) }]
        );
    }

    #[test]
    fn test_saturday_birthday_moves_to_monday() {
        let book = book_with(&[("Bob", "17.10.1985")]);
        let upcoming = book.upcoming_birthdays(7, date(2026, 10, 16));
        assert_eq!(upcoming[0].congratulation_date, date(2026, 10, 19));
    }

    #[test]
    fn test_window_is_half_open() {
        let book = book_with(&[
            ("Today", "19.10.1990"),
            ("LastDay", "25.10.1990"),
            ("TooLate", "26.10.1990"),
            ("Yesterday", "18.10.1990"),
        ]);
        let upcoming = book.upcoming_birthdays(7, date(2026, 10, 19));
        let names: Vec<_> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Today", "LastDay"]);
        assert_eq!(upcoming[1].congratulation_date, date(2026, 10, 26));
    }

    #[test]
    fn test_passed_birthday_wraps_to_next_year() {
        let book = book_with(&[("Newyear", "02.01.2000")]);
        let upcoming = book.upcoming_birthdays(7, date(2026, 12, 28));
        assert_eq!(upcoming[0].congratulation_date, date(2027, 1, 4));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let book = book_with(&[("Leap", "29.02.2000")]);
        let upcoming = book.upcoming_birthdays(7, date(2023, 2, 23));
        assert_eq!(upcoming[0].congratulation_date, date(2023, 2, 28));
    }

    #[test]
    fn test_sorted_by_date_then_name() {
        let book = book_with(&[
            ("Zed", "17.10.1990"),
            ("Amy", "18.10.1990"),
            ("Carl", "20.10.1990"),
            ("Bea", "19.10.1990"),
        ]);
        let upcoming = book.upcoming_birthdays(7, date(2026, 10, 16));
        let rendered: Vec<_> = upcoming.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Amy: 19.10.2026", "Bea: 19.10.2026", "Zed: 19.10.2026", "Carl: 20.10.2026"]
        );
    }

    #[test]
    fn test_never_on_weekend_and_idempotent() {
        let mut book = AddressBook::new();
        for day in 1..=28 {
            let mut record = Record::new(format!("Contact{:02}", day));
            record.set_birthday(&format!("{:02}.11.1990", day)).unwrap();
            book.add_record(record).unwrap();
        }
        let reference = date(2026, 10, 30);
        let first = book.upcoming_birthdays(30, reference);
        assert!(!first.is_empty());
        assert!(first
            .iter()
            .all(|u| !matches!(u.congratulation_date.weekday(), Weekday::Sat | Weekday::Sun)));
        assert_eq!(first, book.upcoming_birthdays(30, reference));
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let mut book = book_with(&[("Alice", "20.10.1990")]);
        book.add_record(Record::new("Nobody")).unwrap();
        let upcoming = book.upcoming_birthdays(7, date(2026, 10, 19));
        assert_eq!(upcoming.len(), 1);
    }
}
