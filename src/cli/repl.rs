//! Interactive command loop

use crate::cli::output;
use crate::domain::AddressBook;
use crate::error::{Result, RoloError};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

const USAGE_ADD: &str = "Invalid command. Usage: add [name] [phone]";
const USAGE_CHANGE: &str = "Invalid command. Usage: change [name] [new_phone]";
const USAGE_PHONE: &str = "Invalid command. Usage: phone [name]";
const USAGE_ADD_BIRTHDAY: &str = "Invalid command. Usage: add-birthday [name] [birthday]";
const USAGE_SHOW_BIRTHDAY: &str = "Invalid command. Usage: show-birthday [name]";

/// One fully-formed command from a line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Hello,
    Close,
}

/// What a line of user input parsed to.
///
/// Argument-count problems are resolved here so a [`Command`] always carries
/// the right number of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Command(Command),
    /// Known keyword with the wrong argument count; carries the usage line.
    Usage(&'static str),
    /// Unrecognized keyword.
    Unknown,
    /// Nothing but whitespace.
    Empty,
}

/// Parse one input line.
///
/// The keyword is matched case-insensitively; arguments keep their case
/// since names are case-sensitive keys. Commands that take no arguments
/// ignore any extras.
pub fn parse_line(line: &str) -> ParsedLine {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return ParsedLine::Empty;
    };
    let keyword = keyword.to_lowercase();
    let args: Vec<&str> = parts.collect();

    match keyword.as_str() {
        "add" => parse_pair(&args, USAGE_ADD, |name, phone| Command::Add { name, phone }),
        "change" => parse_pair(&args, USAGE_CHANGE, |name, phone| Command::Change {
            name,
            phone,
        }),
        "phone" => parse_single(&args, USAGE_PHONE, |name| Command::Phone { name }),
        "all" => ParsedLine::Command(Command::All),
        "add-birthday" => parse_pair(&args, USAGE_ADD_BIRTHDAY, |name, birthday| {
            Command::AddBirthday { name, birthday }
        }),
        "show-birthday" => {
            parse_single(&args, USAGE_SHOW_BIRTHDAY, |name| Command::ShowBirthday {
                name,
            })
        }
        "birthdays" => ParsedLine::Command(Command::Birthdays),
        "hello" => ParsedLine::Command(Command::Hello),
        "close" | "exit" => ParsedLine::Command(Command::Close),
        _ => ParsedLine::Unknown,
    }
}

/// Helper for commands taking exactly two arguments
fn parse_pair<F>(args: &[&str], usage: &'static str, f: F) -> ParsedLine
where
    F: FnOnce(String, String) -> Command,
{
    match args {
        [first, second] => ParsedLine::Command(f((*first).to_string(), (*second).to_string())),
        _ => ParsedLine::Usage(usage),
    }
}

/// Helper for commands taking exactly one argument
fn parse_single<F>(args: &[&str], usage: &'static str, f: F) -> ParsedLine
where
    F: FnOnce(String) -> Command,
{
    match args {
        [only] => ParsedLine::Command(f((*only).to_string())),
        _ => ParsedLine::Usage(usage),
    }
}

/// Apply one command to the book and return the line(s) to print.
///
/// Validation errors and lookup misses come back as their user message; the
/// book is left unchanged in those cases. `Close` only yields the farewell;
/// stopping is the loop's decision.
fn execute(book: &mut AddressBook, command: Command, today: NaiveDate) -> String {
    match command {
        Command::Add { name, phone } => match book.add_contact(&name, &phone) {
            Ok(()) => "Contact added.".to_string(),
            Err(e) => e.to_string(),
        },
        Command::Change { name, phone } => match book.change_contact(&name, &phone) {
            Ok(()) => "Contact updated.".to_string(),
            Err(e) => e.to_string(),
        },
        Command::Phone { name } => match book.phone(&name) {
            Some(phone) => phone.to_string(),
            None => RoloError::ContactNotFound.to_string(),
        },
        Command::All => output::format_contact_list(book),
        Command::AddBirthday { name, birthday } => match book.add_birthday(&name, &birthday) {
            Ok(()) => "Birthday added.".to_string(),
            Err(e) => e.to_string(),
        },
        Command::ShowBirthday { name } => match book.birthday(&name) {
            Some(birthday) => format!("{}'s birthday: {}", name, birthday),
            None => RoloError::ContactNotFound.to_string(),
        },
        Command::Birthdays => output::format_upcoming_birthdays(&book.upcoming_birthdays(today)),
        Command::Hello => "How can I help you?".to_string(),
        Command::Close => "Good bye!".to_string(),
    }
}

/// Run the interactive session loop over the given streams.
///
/// The caller greets beforehand and persists the book afterwards; this loop
/// owns everything in between and returns after `close`/`exit` or when the
/// input ends. Blank lines re-prompt without a message.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit` so the book still gets saved.
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        match parse_line(&line) {
            ParsedLine::Command(command) => {
                let closing = matches!(command, Command::Close);
                let message = execute(book, command, Local::now().date_naive());
                writeln!(output, "{}", message)?;
                if closing {
                    return Ok(());
                }
            }
            ParsedLine::Usage(usage) => writeln!(output, "{}", usage)?,
            ParsedLine::Unknown => writeln!(output, "Invalid command.")?,
            ParsedLine::Empty => {}
        }
    }
}
