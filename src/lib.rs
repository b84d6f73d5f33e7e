//! noted - Tagged notes from the terminal
//!
//! A command-line note-taking application that keeps short titled, tagged notes
//! in a single pretty-printed JSON file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::NotedError;
