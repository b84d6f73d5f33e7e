//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::output::USAGE;

#[derive(Parser, Debug)]
#[command(name = "noted")]
#[command(about = "Tagged notes in a local JSON file", long_about = None)]
#[command(version)]
#[command(override_help = USAGE)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Notes file (default: notes.json in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        title: String,
        content: String,
        tags: String,
    },

    /// List all notes
    List {
        /// Print notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// View a note by id
    View {
        /// Note id as shown by `list`
        #[arg(allow_hyphen_values = true)]
        id: String,

        /// Print the note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by id
    Delete {
        /// Note id as shown by `list`
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Show usage
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["noted", "add", "Groceries", "Buy milk", "home"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                content,
                tags,
            }) => {
                assert_eq!(title, "Groceries");
                assert_eq!(content, "Buy milk");
                assert_eq!(tags, "home");
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_add_accepts_empty_strings() {
        // Emptiness is a validation concern, not a parse error
        let cli = Cli::try_parse_from(["noted", "add", "", "body", "tag"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { title, .. }) if title.is_empty()));
    }

    #[test]
    fn test_add_missing_arguments() {
        let err = Cli::try_parse_from(["noted", "add", "only-title"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_command() {
        let err = Cli::try_parse_from(["noted", "edit", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["noted"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_file_flag() {
        let cli = Cli::try_parse_from(["noted", "list", "--file", "/tmp/x.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/x.json")));
        assert!(matches!(cli.command, Some(Commands::List { json: false })));
    }

    #[test]
    fn test_view_id_is_raw_string() {
        let cli = Cli::try_parse_from(["noted", "view", "abc"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::View { id, json: false }) if id == "abc"));
    }
}
