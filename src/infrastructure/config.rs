//! Configuration management

use crate::error::{NotedError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file in the working directory
pub const CONFIG_FILE: &str = ".noted.toml";

/// Backing file used when nothing else is configured
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Environment variable overriding the backing file
pub const NOTES_FILE_ENV: &str = "NOTED_FILE";

pub const DEFAULT_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub file: PathBuf,
    pub time_format: String,
    pub lock: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(DEFAULT_NOTES_FILE),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            lock: true,
        }
    }
}

impl Config {
    /// Load .noted.toml from the given directory, falling back to defaults when absent.
    ///
    /// A relative `file` is resolved against `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default().anchored_at(dir));
            }
            Err(e) => {
                return Err(NotedError::Config(format!(
                    "Failed to read {}: {}",
                    config_path.display(),
                    e
                )))
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            NotedError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })?;

        if StrftimeItems::new(&config.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(NotedError::Config(format!(
                "Invalid time_format '{}' in {}",
                config.time_format, CONFIG_FILE
            )));
        }

        Ok(config.anchored_at(dir))
    }

    /// Resolve the configuration for a run: `--file` wins over NOTED_FILE,
    /// which wins over the config file.
    pub fn resolve(dir: &Path, file_flag: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load_from_dir(dir)?;

        let env_file = std::env::var_os(NOTES_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(file) = file_flag.or(env_file) {
            config.file = file;
        }

        Ok(config)
    }

    fn anchored_at(mut self, dir: &Path) -> Self {
        if self.file.is_relative() {
            self.file = dir.join(&self.file);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(config.file, temp.path().join("notes.json"));
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
        assert!(config.lock);
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "file = \"data/my-notes.json\"\nlock = false\n",
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(config.file, temp.path().join("data/my-notes.json"));
        assert!(!config.lock);
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_absolute_file_kept() {
        let temp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let target = other.path().join("notes.json");
        fs::write(
            temp.path().join(CONFIG_FILE),
            format!("file = {:?}\n", target.to_string_lossy()),
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(config.file, target);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "lock = \"maybe\"\n").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(NotedError::Config(msg)) => assert!(msg.contains(CONFIG_FILE)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_time_format_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "time_format = \"%Y-%\"\n").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(NotedError::Config(msg)) => assert!(msg.contains("time_format")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "file = \"from-config.json\"\n").unwrap();
        let flag = temp.path().join("from-flag.json");

        let config = Config::resolve(temp.path(), Some(flag.clone())).unwrap();

        assert_eq!(config.file, flag);
    }
}
