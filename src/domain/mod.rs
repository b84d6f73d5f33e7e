//! Domain layer - Notes and the repository aggregate

pub mod note;
pub mod repository;

pub use note::{Note, NoteDraft, NoteId};
pub use repository::NoteRepository;
