//! JSON file storage for the note repository

use crate::domain::{Note, NoteId, NoteRepository};
use crate::error::{NotedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Abstract storage for the note repository
pub trait NoteStore {
    /// Location of the backing file
    fn path(&self) -> &Path;

    /// Read the whole repository. A missing backing file is an empty repository.
    fn load(&self) -> Result<NoteRepository>;

    /// Replace the stored repository with `repo`.
    fn save(&self, repo: &NoteRepository) -> Result<()>;
}

/// On-disk shape of the backing file
#[derive(Debug, Serialize, Deserialize)]
struct NotesDocument {
    notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_id: Option<NoteId>,
}

/// Pretty-printed JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Serialize with 2-space indentation and a trailing newline.
    pub fn encode(repo: &NoteRepository) -> Result<String> {
        let document = NotesDocument {
            notes: repo.notes().to_vec(),
            next_id: Some(repo.next_id()),
        };
        let mut contents = serde_json::to_string_pretty(&document)?;
        contents.push('\n');
        Ok(contents)
    }

    pub fn decode(contents: &str) -> Result<NoteRepository> {
        let document: NotesDocument =
            serde_json::from_str(contents).map_err(|e| NotedError::Decode(e.to_string()))?;
        NoteRepository::from_parts(document.notes, document.next_id)
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// The replace is atomic on Unix only. On Windows the destination is removed
    /// before the rename, so a crash between the two leaves only the temp file
    /// holding the new contents.
    fn write_atomic(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.noted-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotedError::Io(e));
        }

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp_path);
        })?;
        Ok(())
    }
}

impl NoteStore for JsonFileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<NoteRepository> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no notes file yet, starting empty");
                return Ok(NoteRepository::new());
            }
            Err(e) => return Err(NotedError::Io(e)),
        };

        let repo = Self::decode(&contents).map_err(|e| match e {
            NotedError::Decode(msg) => {
                NotedError::Decode(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;

        debug!(path = %self.path.display(), count = repo.len(), "notes loaded");
        Ok(repo)
    }

    fn save(&self, repo: &NoteRepository) -> Result<()> {
        let contents = Self::encode(repo)?;
        self.write_atomic(&contents)?;

        info!(path = %self.path.display(), count = repo.len(), "notes saved");
        Ok(())
    }
}
