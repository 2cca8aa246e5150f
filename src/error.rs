//! Error types for rolo

use thiserror::Error;

/// Main error type for the rolo application.
///
/// The display text of the three interaction errors is the exact line the
/// command loop prints, so changing it changes the user-visible protocol.
#[derive(Debug, Error)]
pub enum RoloError {
    #[error("Invalid phone number format. Phone number must be 10 digits.")]
    InvalidPhone,

    #[error("Invalid birthday format. Birthday must be DD.MM.YYYY.")]
    InvalidBirthday,

    #[error("Contact not found.")]
    ContactNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl RoloError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RoloError::Snapshot(_) => 2,
            RoloError::InvalidPhone | RoloError::InvalidBirthday => 3,
            RoloError::ContactNotFound => 4,
            _ => 1,
        }
    }
}

/// Result type using RoloError
pub type Result<T> = std::result::Result<T, RoloError>;
