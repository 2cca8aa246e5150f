//! rolo - Interactive address book
//!
//! A command-line contact manager that keeps names, ten-digit phone numbers
//! and birthdays, persists the whole book as a single JSON snapshot, and
//! answers the weekly upcoming-birthday query.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RoloError;
