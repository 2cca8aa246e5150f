//! Infrastructure layer - External I/O and persistence

pub mod snapshot;

pub use snapshot::{LoadOutcome, SnapshotStore};
