use clap::error::ErrorKind;
use clap::Parser;
use noted::application::{add_note, delete_note, list_notes, view_note};
use noted::cli::output::{format_note_json, format_notes_json};
use noted::cli::{format_note, format_note_list, Cli, Commands, USAGE};
use noted::domain::{NoteDraft, NoteId};
use noted::error::{NotedError, Result};
use noted::infrastructure::{Config, JsonFileStore, NoteStore, StoreLock};
use std::path::PathBuf;

// Every path exits with status 0; failures are reported on stderr.
fn main() {
    noted::logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            report_parse_error(e);
            return;
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e.display_with_suggestions());
    }
}

fn report_parse_error(e: clap::Error) {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
        }
        ErrorKind::InvalidSubcommand => println!("{}", USAGE),
        _ => {
            // First paragraph of clap's message, without its "error: " prefix
            let rendered = e.to_string();
            let summary = rendered
                .lines()
                .take_while(|line| !line.trim().is_empty())
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(" ");
            let summary = summary.trim_start_matches("error: ").to_string();

            eprintln!("Error: {}", NotedError::Argument(summary));
            eprintln!("{}", USAGE);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Help never touches the config or the notes file
    let open = |file: Option<PathBuf>| -> Result<(Config, JsonFileStore)> {
        let cwd = std::env::current_dir()?;
        let config = Config::resolve(&cwd, file)?;
        let store = JsonFileStore::new(config.file.clone());
        Ok((config, store))
    };

    match cli.command.unwrap_or(Commands::Help) {
        Commands::Help => println!("{}", USAGE),
        Commands::Add {
            title,
            content,
            tags,
        } => {
            let (config, store) = open(cli.file)?;
            let _lock = acquire_lock(&config)?;
            let mut repository = store.load()?;

            let note = add_note(&mut repository, &store, NoteDraft::new(title, content, tags))?;
            println!("✨ Note {} added!", note.id);
        }
        Commands::List { json } => {
            let (config, store) = open(cli.file)?;
            let repository = store.load()?;
            let notes = list_notes(&repository);

            if json {
                println!("{}", format_notes_json(notes)?);
            } else {
                println!("{}", format_note_list(notes, &config.time_format));
            }
        }
        Commands::View { id, json } => {
            let id: NoteId = id.parse()?;
            let (config, store) = open(cli.file)?;
            let repository = store.load()?;
            let note = view_note(&repository, id)?;

            if json {
                println!("{}", format_note_json(note)?);
            } else {
                print!("{}", format_note(note, &config.time_format));
            }
        }
        Commands::Delete { id } => {
            let id: NoteId = id.parse()?;
            let (config, store) = open(cli.file)?;
            let _lock = acquire_lock(&config)?;
            let mut repository = store.load()?;

            let removed = delete_note(&mut repository, &store, id)?;
            println!("Note {} deleted.", removed.id);
        }
    }

    Ok(())
}

fn acquire_lock(config: &Config) -> Result<Option<StoreLock>> {
    if config.lock {
        StoreLock::acquire(&config.file).map(Some)
    } else {
        Ok(None)
    }
}
