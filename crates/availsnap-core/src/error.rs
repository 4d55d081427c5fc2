//! Error types for availsnap-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid calendar document: {0}")]
    InvalidCalendar(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
