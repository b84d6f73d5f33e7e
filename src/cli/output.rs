//! Output formatting utilities

use crate::domain::Note;
use crate::error::Result;
use chrono::Local;

pub const USAGE: &str = "\
Usage: noted [--file <PATH>] <command> [arguments]
Commands:
  add <title> <content> <tags>   Add a new note
  list [--json]                  List all notes
  view <id> [--json]             View a note
  delete <id>                    Delete a note
  edit <id>                      Edit a note (not yet supported)
  help                           Show this help message";

pub const NO_NOTES: &str = "No notes found.";

/// Format one note as a display block
pub fn format_note(note: &Note, time_format: &str) -> String {
    format!(
        "{}. {}\n   {}\n   Tags: {}\n   Created: {}\n",
        note.id,
        note.title,
        note.content,
        note.tags,
        note.created_at.with_timezone(&Local).format(time_format)
    )
}

/// Format all notes in stored order, blank line between entries
pub fn format_note_list(notes: &[Note], time_format: &str) -> String {
    if notes.is_empty() {
        return NO_NOTES.to_string();
    }

    notes
        .iter()
        .map(|note| format_note(note, time_format))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_notes_json(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

pub fn format_note_json(note: &Note) -> Result<String> {
    Ok(serde_json::to_string_pretty(note)?)
}
