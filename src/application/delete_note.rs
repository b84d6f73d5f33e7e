//! Delete note use case

use crate::domain::{Note, NoteId, NoteRepository};
use crate::error::Result;
use crate::infrastructure::NoteStore;
use tracing::info;

/// Remove a note and persist the repository. An unknown id saves nothing.
pub fn delete_note(
    repository: &mut NoteRepository,
    store: &impl NoteStore,
    id: NoteId,
) -> Result<Note> {
    let removed = repository.delete(id)?;
    store.save(repository)?;

    info!(id = %removed.id, "note deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteDraft;
    use crate::error::NotedError;
    use crate::infrastructure::JsonFileStore;
    use std::fs;
    use tempfile::TempDir;

    fn seeded_store(temp: &TempDir) -> (JsonFileStore, NoteRepository) {
        let store = JsonFileStore::new(temp.path().join("notes.json"));
        let mut repo = NoteRepository::new();
        for title in ["a", "b", "c"] {
            repo.add(NoteDraft::new(title, "content", "tag")).unwrap();
        }
        store.save(&repo).unwrap();
        (store, repo)
    }

    #[test]
    fn test_delete_persists_removal() {
        let temp = TempDir::new().unwrap();
        let (store, mut repo) = seeded_store(&temp);

        let removed = delete_note(&mut repo, &store, NoteId::new(2).unwrap()).unwrap();

        assert_eq!(removed.title, "b");
        let titles: Vec<String> = store
            .load()
            .unwrap()
            .notes()
            .iter()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let (store, mut repo) = seeded_store(&temp);
        let before = fs::read(store.path()).unwrap();

        let result = delete_note(&mut repo, &store, NoteId::new(42).unwrap());

        assert!(matches!(result, Err(NotedError::NotFound(_))));
        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert_eq!(repo.len(), 3);
    }
}
