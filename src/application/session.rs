//! Session lifecycle use case

use crate::domain::AddressBook;
use crate::error::Result;
use crate::infrastructure::{LoadOutcome, SnapshotStore};

/// Service for the load-interact-save lifecycle of one program run.
///
/// The book lives in memory for the whole session; nothing is persisted
/// until [`Session::close`] writes the full snapshot back.
pub struct Session {
    store: SnapshotStore,
}

impl Session {
    /// Create a new session over the given snapshot store
    pub fn new(store: SnapshotStore) -> Self {
        Session { store }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Load the snapshot, starting with an empty book on first run.
    pub fn open(&self) -> Result<AddressBook> {
        match self.store.load()? {
            LoadOutcome::Loaded(book) => Ok(book),
            LoadOutcome::FirstRun => Ok(AddressBook::new()),
        }
    }

    /// Persist the whole book.
    pub fn close(&self, book: &AddressBook) -> Result<()> {
        self.store.save(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_in(temp: &TempDir) -> Session {
        Session::new(SnapshotStore::new(temp.path().join("address_book.json")))
    }

    #[test]
    fn test_open_on_first_run_gives_empty_book() {
        let temp = TempDir::new().unwrap();
        let session = session_in(&temp);

        let book = session.open().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_close_then_open_round_trips() {
        let temp = TempDir::new().unwrap();
        let session = session_in(&temp);

        let mut book = session.open().unwrap();
        book.add_contact("John", "1234567890").unwrap();
        book.add_birthday("John", "15.06.2000").unwrap();
        session.close(&book).unwrap();

        let reloaded = session.open().unwrap();
        assert_eq!(reloaded, book);
    }

    #[test]
    fn test_open_fails_on_corrupt_snapshot() {
        let temp = TempDir::new().unwrap();
        let session = session_in(&temp);

        std::fs::write(session.store().path(), "{broken").unwrap();

        assert!(session.open().is_err());
    }
}
