//! Birthday literals and the upcoming-week window

use crate::error::RoloError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the reminder window in days beyond today (the window itself is
/// inclusive on both ends, so it spans eight calendar dates).
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact's birthday, parsed from a `DD.MM.YYYY` literal.
///
/// The full date is kept so the stored literal round-trips unchanged through
/// the snapshot; only day and month drive the recurrence logic. A literal
/// that names a date which never existed (`31.04.2020`, `29.02.2001`) is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The date this birthday falls on in `year`, if that date exists.
    ///
    /// A Feb 29 birthday has no occurrence in a non-leap year.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
    }

    /// Whether this birthday, placed in `today`'s year, falls inside the
    /// inclusive window `[today, today + 7 days]`.
    ///
    /// Placement never rolls into the next year: a January birthday checked
    /// in late December resolves to the January already behind us and is not
    /// upcoming. A placement that does not exist this year (Feb 29 outside
    /// leap years) is never upcoming either.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match self.occurrence_in(today.year()) {
            Some(date) => today <= date && date <= today + Duration::days(UPCOMING_WINDOW_DAYS),
            None => false,
        }
    }
}

impl FromStr for Birthday {
    type Err = RoloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%d.%m.%Y")
            .map(Birthday)
            .map_err(|_| RoloError::InvalidBirthday)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

impl TryFrom<String> for Birthday {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
