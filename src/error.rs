//! Error types for noted

use crate::domain::NoteId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for noted application
#[derive(Debug, Error)]
pub enum NotedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode notes: {0}")]
    Decode(String),

    #[error("{} cannot be empty", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    #[error("Note not found: {0}")]
    NotFound(NoteId),

    #[error("Note id space exhausted")]
    IdsExhausted,

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Notes file is locked: {0}")]
    Locked(PathBuf),

    #[error("JSON serialization error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl NotedError {
    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotedError::NotFound(id) => {
                format!(
                    "Note not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'noted list' to see the ids of existing notes\n\
                    • Ids are stable and are not renumbered after a delete",
                    id
                )
            }
            NotedError::Locked(path) => {
                format!(
                    "Notes file is locked: {}\n\n\
                    Suggestions:\n\
                    • Wait for the other noted command to finish\n\
                    • If no other noted command is running, the lock is stale: remove {}",
                    path.display(),
                    path.display()
                )
            }
            NotedError::Decode(msg) => {
                format!(
                    "Failed to decode notes: {}\n\n\
                    The notes file is left untouched. Fix or move it, then retry.",
                    msg
                )
            }
            NotedError::Argument(msg) if msg.contains("note id") => {
                format!(
                    "Invalid argument: {}\n\n\
                    Example: noted view 3",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotedError
pub type Result<T> = std::result::Result<T, NotedError>;
