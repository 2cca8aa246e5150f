//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod repl;

pub use commands::Cli;
pub use output::{format_contact_list, format_upcoming_birthdays};
pub use repl::{parse_line, Command, ParsedLine};
