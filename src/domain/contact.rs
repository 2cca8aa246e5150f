//! Contact records and phone number validation

use crate::domain::Birthday;
use crate::error::RoloError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for a valid phone number: exactly ten ASCII digits
fn phone_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // [0-9] rather than \d: the regex crate's \d covers Unicode decimals.
    REGEX.get_or_init(|| Regex::new(r"^[0-9]{10}$").unwrap())
}

/// A validated ten-digit phone number.
///
/// Construction goes through [`FromStr`], so a value of this type always
/// holds exactly ten ASCII digits. Serialization round-trips through the
/// plain digit string and re-validates on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Check whether `input` is exactly ten ASCII digits
    pub fn is_valid(input: &str) -> bool {
        phone_regex().is_match(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = RoloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(PhoneNumber(s.to_string()))
        } else {
            Err(RoloError::InvalidPhone)
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// The stored data for one contact.
///
/// Both fields are independently optional: `add-birthday` on a new name
/// creates a record with no phone, and `add` never touches the birthday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}
