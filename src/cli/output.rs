//! Output formatting utilities

use crate::domain::{AddressBook, Birthday};

/// Format the whole book for the `all` command.
///
/// One `name: phone` line per contact in name order; a record without a
/// phone renders with an empty phone column. No trailing newline, the
/// command loop adds it.
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    let lines: Vec<String> = book
        .contacts()
        .map(|(name, contact)| {
            let phone = contact.phone.as_ref().map(|p| p.as_str()).unwrap_or("");
            format!("{}: {}", name, phone)
        })
        .collect();
    lines.join("\n")
}

/// Format the weekly reminder list for the `birthdays` command.
pub fn format_upcoming_birthdays(upcoming: &[(&str, &Birthday)]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(
        upcoming
            .iter()
            .map(|(name, birthday)| format!("{}'s birthday on {}", name, birthday)),
    );
    lines.join("\n")
}
