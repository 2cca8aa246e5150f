//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// Default snapshot filename, used when neither `--file` nor `ROLO_BOOK`
/// names one.
pub const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Environment variable naming the snapshot file.
pub const BOOK_ENV_VAR: &str = "ROLO_BOOK";

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file holding the address book (default: address_book.json)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the snapshot path: `--file` wins, then `ROLO_BOOK`, then the
    /// default file in the current directory.
    pub fn book_path(&self) -> PathBuf {
        if let Some(path) = &self.file {
            return path.clone();
        }

        if let Ok(path) = std::env::var(BOOK_ENV_VAR) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        PathBuf::from(DEFAULT_BOOK_FILE)
    }
}
