//! Error types for nginx-location-dedup

use thiserror::Error;

/// Result type alias for dedup operations
pub type Result<T> = std::result::Result<T, DedupError>;

/// Error types for dedup operations
#[derive(Error, Debug)]
pub enum DedupError {
    /// Backup copy could not be created or verified; the target is untouched
    #[error("Cannot create backup of '{path}': {reason}")]
    BackupFailed { path: String, reason: String },

    /// Target file could not be opened or read
    #[error("Cannot read '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    /// Filtered output could not be written back to the target
    #[error(
        "Cannot write '{path}': {reason}\n\
         The original content is preserved in '{backup}'"
    )]
    WriteFailed {
        path: String,
        backup: String,
        reason: String,
    },

    /// A matched block is still open when the file ends
    #[error("Unterminated location block in '{path}' starting at line {line}: braces never balance")]
    UnterminatedBlock { path: String, line: usize },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error during other operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
