//! View note use case

use crate::domain::{Note, NoteId, NoteRepository};
use crate::error::Result;

/// Look up one note by its stable id. Read only.
pub fn view_note(repository: &NoteRepository, id: NoteId) -> Result<&Note> {
    repository.get(id)
}
