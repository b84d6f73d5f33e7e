//! Add note use case

use crate::domain::{Note, NoteDraft, NoteRepository};
use crate::error::Result;
use crate::infrastructure::NoteStore;
use tracing::info;

/// Append a note and persist the repository. Nothing is saved if validation fails.
pub fn add_note(
    repository: &mut NoteRepository,
    store: &impl NoteStore,
    draft: NoteDraft,
) -> Result<Note> {
    let note = repository.add(draft)?.clone();
    store.save(repository)?;

    info!(id = %note.id, "note added");
    Ok(note)
}
