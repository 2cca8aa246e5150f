//! The address book aggregate and its operations

use crate::domain::{Birthday, Contact, PhoneNumber};
use crate::error::{Result, RoloError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole contact mapping, keyed by case-sensitive name.
///
/// Serializes transparently as the mapping itself, so the snapshot file is a
/// plain JSON object from name to record. `BTreeMap` keeps every listing in
/// name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    contacts: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Set the phone for `name`, creating the record if the name is new and
    /// keeping any stored birthday if it is not.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<()> {
        let phone: PhoneNumber = phone.parse()?;
        self.contacts.entry(name.to_string()).or_default().phone = Some(phone);
        Ok(())
    }

    /// Overwrite the phone of an existing contact.
    ///
    /// Existence is checked before the phone format, so `change` on an
    /// unknown name reports the missing contact even when the new phone is
    /// also malformed.
    pub fn change_contact(&mut self, name: &str, phone: &str) -> Result<()> {
        let Some(contact) = self.contacts.get_mut(name) else {
            return Err(RoloError::ContactNotFound);
        };
        contact.phone = Some(phone.parse()?);
        Ok(())
    }

    /// The stored phone for `name`.
    ///
    /// An unknown name and a record without a phone both come back as
    /// `None`; callers report the two the same way.
    pub fn phone(&self, name: &str) -> Option<&PhoneNumber> {
        self.contacts.get(name)?.phone.as_ref()
    }

    /// All contacts in name order.
    pub fn contacts(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.contacts
            .iter()
            .map(|(name, contact)| (name.as_str(), contact))
    }

    /// Set the birthday for `name`, creating a phone-less record when the
    /// name is new.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<()> {
        let birthday: Birthday = birthday.parse()?;
        self.contacts.entry(name.to_string()).or_default().birthday = Some(birthday);
        Ok(())
    }

    /// The stored birthday for `name`; unknown name and birthday-less record
    /// both come back as `None`.
    pub fn birthday(&self, name: &str) -> Option<&Birthday> {
        self.contacts.get(name)?.birthday.as_ref()
    }

    /// Contacts whose birthday falls inside the week starting at `today`,
    /// in name order.
    ///
    /// Records without a birthday are skipped, as are birthdays that cannot
    /// be placed in the current year (Feb 29 outside leap years). A record
    /// that cannot be placed never aborts the scan for the others.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<(&str, &Birthday)> {
        self.contacts
            .iter()
            .filter_map(|(name, contact)| {
                let birthday = contact.birthday.as_ref()?;
                birthday
                    .is_upcoming(today)
                    .then_some((name.as_str(), birthday))
            })
            .collect()
    }
}
