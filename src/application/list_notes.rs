//! List notes use case

use crate::domain::{Note, NoteRepository};

/// All notes in stored order. An empty slice means there is nothing to show.
pub fn list_notes(repository: &NoteRepository) -> &[Note] {
    repository.notes()
}
