//! Error type for reconciliation runs.

use std::path::PathBuf;

/// Errors that abort a run.
///
/// A run either writes one complete script or fails with one of these.
#[derive(Debug, thiserror::Error)]
pub enum DropfillError {
    /// The association store could not be opened or queried to completion
    #[error("Association query failed: {0}")]
    SourceQuery(String),

    /// The destination script could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The monster stats file could not be read
    #[error("Failed to read monster stats from {}: {source}", .path.display())]
    StatsLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The monster stats file is not a valid stats mapping
    #[error("Invalid monster stats in {}: {message}", .path.display())]
    StatsParse { path: PathBuf, message: String },
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for DropfillError {
    fn from(e: rusqlite::Error) -> Self {
        Self::SourceQuery(e.to_string())
    }
}

/// Result type for dropfill operations
pub type Result<T> = std::result::Result<T, DropfillError>;
