//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod lock;
pub mod store;

pub use config::Config;
pub use lock::StoreLock;
pub use store::{JsonFileStore, NoteStore};
