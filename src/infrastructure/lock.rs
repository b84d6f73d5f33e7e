//! Exclusive lock file held around load, mutate, save

use crate::error::{NotedError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Guard for `<notes file>.lock`. The lock file is removed on drop.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl StoreLock {
    /// Lock path for a given notes file
    pub fn path_for(notes_file: &Path) -> PathBuf {
        let mut name = notes_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "notes.json".into());
        name.push(".lock");
        notes_file.with_file_name(name)
    }

    /// Create the lock file, failing with `Locked` if another run holds it.
    pub fn acquire(notes_file: &Path) -> Result<Self> {
        let path = Self::path_for(notes_file);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                debug!(lock = %path.display(), "notes file is locked by another run");
                return Err(NotedError::Locked(path));
            }
            Err(e) => return Err(NotedError::Io(e)),
        };

        // Owner pid, for whoever finds a stale lock
        writeln!(file, "{}", std::process::id())?;
        debug!(lock = %path.display(), "lock acquired");

        Ok(StoreLock { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(lock = %self.path.display(), error = %e, "failed to remove lock file");
        }
    }
}
