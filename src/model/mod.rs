//! Contact data model: value objects, records and the address book.

pub mod address_book;
pub mod birthday;
pub mod phone;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use birthday::Birthday;
pub use phone::Phone;
pub use record::Record;
