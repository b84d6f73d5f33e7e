//! Application layer - Use cases, one per command
//!
//! Each handler receives the repository loaded for this run and, when it
//! mutates, the store to write it back to.

pub mod add_note;
pub mod delete_note;
pub mod list_notes;
pub mod view_note;

pub use add_note::add_note;
pub use delete_note::delete_note;
pub use list_notes::list_notes;
pub use view_note::view_note;
