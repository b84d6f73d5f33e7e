//! Note repository aggregate

use crate::domain::{Note, NoteDraft, NoteId};
use crate::error::{NotedError, Result};
use chrono::{DateTime, FixedOffset, Local};
use std::collections::HashSet;

/// Ordered collection of notes plus the id counter.
///
/// Invariants:
/// - ids are unique and never renumbered
/// - `next_id` is greater than every id present, so deleted ids are never reused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRepository {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for NoteRepository {
    fn default() -> Self {
        NoteRepository {
            notes: Vec::new(),
            next_id: NoteId::FIRST,
        }
    }
}

impl NoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a repository from persisted parts, checking the id invariants.
    ///
    /// `next_id` is raised to `max(id) + 1` when the stored counter is missing or stale.
    pub fn from_parts(notes: Vec<Note>, next_id: Option<NoteId>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert(note.id) {
                return Err(NotedError::Decode(format!(
                    "duplicate note id {}",
                    note.id
                )));
            }
        }

        let mut repo = NoteRepository {
            notes,
            ..Self::default()
        };
        let derived = match repo.notes.iter().map(|n| n.id).max() {
            Some(max) => max
                .next()
                .ok_or_else(|| NotedError::Decode("note id space exhausted".to_string()))?,
            None => repo.next_id,
        };
        repo.next_id = next_id.map_or(derived, |stored| stored.max(derived));

        Ok(repo)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note stamped with the current local time.
    pub fn add(&mut self, draft: NoteDraft) -> Result<&Note> {
        self.add_at(draft, Local::now().fixed_offset())
    }

    /// Append a note stamped with `now`.
    pub fn add_at(&mut self, draft: NoteDraft, now: DateTime<FixedOffset>) -> Result<&Note> {
        draft.validate()?;

        let id = self.next_id;
        self.next_id = id.next().ok_or(NotedError::IdsExhausted)?;
        self.notes.push(draft.into_note(id, now));

        let index = self.notes.len() - 1;
        Ok(&self.notes[index])
    }

    /// First note with the given id
    pub fn get(&self, id: NoteId) -> Result<&Note> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .ok_or(NotedError::NotFound(id))
    }

    /// Remove the first note with the given id, keeping the order of the rest.
    pub fn delete(&mut self, id: NoteId) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(NotedError::NotFound(id))?;

        Ok(self.notes.remove(index))
    }
}
