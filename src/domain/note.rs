//! Note record and its identifier

use crate::error::{NotedError, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a note. Always >= 1 once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct NoteId(u64);

impl NoteId {
    pub const FIRST: NoteId = NoteId(1);

    pub fn new(value: u64) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(NoteId(value))
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` once the id space is used up.
    pub(crate) fn next(&self) -> Option<NoteId> {
        self.0.checked_add(1).map(NoteId)
    }
}

impl TryFrom<u64> for NoteId {
    type Error = String;

    fn try_from(value: u64) -> std::result::Result<Self, Self::Error> {
        NoteId::new(value).ok_or_else(|| "note id must be at least 1".to_string())
    }
}

impl From<NoteId> for u64 {
    fn from(id: NoteId) -> u64 {
        id.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = NotedError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u64 = s.parse().map_err(|_| {
            NotedError::Argument(format!(
                "Invalid note id '{}': expected a positive integer",
                s
            ))
        })?;

        NoteId::new(value).ok_or_else(|| {
            NotedError::Argument(format!(
                "Invalid note id '{}': ids start at 1",
                s
            ))
        })
    }
}

/// A single persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// User input for a new note, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        NoteDraft {
            title: title.into(),
            content: content.into(),
            tags: tags.into(),
        }
    }

    /// Every field must be non-empty. Whitespace is not trimmed, so `"  "` passes.
    pub fn validate(&self) -> Result<()> {
        let fields: Vec<&'static str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("tags", &self.tags),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(NotedError::Validation { fields })
        }
    }

    /// Turn the draft into a note. Both timestamps get the same instant.
    pub(crate) fn into_note(self, id: NoteId, now: DateTime<FixedOffset>) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            created_at: now,
            updated_at: now,
        }
    }
}
