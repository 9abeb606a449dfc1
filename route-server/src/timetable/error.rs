//! Timetable loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading a timetable or nearby-station table.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Reading the file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but failed validation
    #[error("record {index} ({train_id}): {source}")]
    InvalidRecord {
        index: usize,
        train_id: String,
        source: DomainError,
    },

    /// A nearby-station entry names a blank station
    #[error("nearby stations: {0}")]
    InvalidStation(#[from] crate::domain::InvalidStationId),
}
