//! Snapshot persistence for the address book

use crate::domain::AddressBook;
use crate::error::{Result, RoloError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of reading the snapshot file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A snapshot existed and parsed cleanly.
    Loaded(AddressBook),
    /// No snapshot file yet: the expected first-run state, not an error.
    FirstRun,
}

/// Whole-file persistence for the contact mapping.
///
/// The snapshot path is explicit configuration passed in at construction;
/// the store keeps no other state. The program loads once at startup and
/// saves once at shutdown, replacing the file with the full mapping.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot.
    ///
    /// Only a missing file maps to [`LoadOutcome::FirstRun`]. Every other
    /// read or parse failure propagates, so a corrupt snapshot is never
    /// silently replaced by an empty book on the next save.
    pub fn load(&self) -> Result<LoadOutcome> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::FirstRun),
            Err(e) => return Err(RoloError::Io(e)),
        };

        if data.trim().is_empty() {
            // A zero-length file counts as an empty book, not corruption.
            return Ok(LoadOutcome::Loaded(AddressBook::new()));
        }

        let book = serde_json::from_str(&data)?;
        Ok(LoadOutcome::Loaded(book))
    }

    /// Replace the snapshot with the full current mapping using a
    /// best-effort atomic replace: write to a temp file in the same
    /// directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let data = serde_json::to_string_pretty(book)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.rolo-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("address_book.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, data)?;

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> SnapshotStore {
        SnapshotStore::new(temp.path().join("address_book.json"))
    }

    #[test]
    fn test_load_missing_file_is_first_run() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(store.load().unwrap(), LoadOutcome::FirstRun);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut book = AddressBook::new();
        book.add_contact("John", "1234567890").unwrap();
        book.add_birthday("John", "15.06.2000").unwrap();
        store.save(&book).unwrap();

        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(book));
    }

    #[test]
    fn test_save_writes_readable_json() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut book = AddressBook::new();
        book.add_contact("John", "1234567890").unwrap();
        book.add_birthday("John", "15.06.2000").unwrap();
        store.save(&book).unwrap();

        let data = fs::read_to_string(store.path()).unwrap();
        assert!(data.contains("\"John\""));
        assert!(data.contains("\"1234567890\""));
        assert!(data.contains("\"15.06.2000\""));
    }

    #[test]
    fn test_load_empty_file_is_empty_book() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "").unwrap();

        assert_eq!(
            store.load().unwrap(),
            LoadOutcome::Loaded(AddressBook::new())
        );
    }

    #[test]
    fn test_load_corrupt_snapshot_fails() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "not json at all {{{").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, RoloError::Snapshot(_)));
    }

    #[test]
    fn test_load_rejects_snapshot_with_invalid_phone() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "{\"John\":{\"phone\":\"12\"}}").unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut book = AddressBook::new();
        book.add_contact("John", "1234567890").unwrap();
        store.save(&book).unwrap();

        book.change_contact("John", "0987654321").unwrap();
        store.save(&book).unwrap();

        match store.load().unwrap() {
            LoadOutcome::Loaded(loaded) => {
                assert_eq!(loaded.phone("John").unwrap().as_str(), "0987654321");
            }
            LoadOutcome::FirstRun => panic!("expected a snapshot"),
        }
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&AddressBook::new()).unwrap();
        store.save(&AddressBook::new()).unwrap();

        let leftovers: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains("rolo-tmp"))
            .collect();
        assert!(leftovers.is_empty(), "leftover temp files: {:?}", leftovers);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp.path().join("nested/dir/book.json"));

        store.save(&AddressBook::new()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_save_empty_book_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&AddressBook::new()).unwrap();

        assert_eq!(
            store.load().unwrap(),
            LoadOutcome::Loaded(AddressBook::new())
        );
    }
}
