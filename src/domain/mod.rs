//! Domain layer - Contact records, validation and the birthday window

pub mod birthday;
pub mod book;
pub mod contact;

pub use birthday::Birthday;
pub use book::AddressBook;
pub use contact::{Contact, PhoneNumber};
