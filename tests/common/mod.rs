#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn noted_cmd() -> Command {
    let mut cmd = Command::cargo_bin("noted").unwrap();
    cmd.env_remove("NOTED_FILE");
    cmd.env_remove("NOTED_LOG");
    cmd
}

/// Run `noted add` in `dir` and assert it succeeded.
pub fn add(dir: &Path, title: &str, content: &str, tags: &str) {
    noted_cmd()
        .current_dir(dir)
        .args(["add", title, content, tags])
        .assert()
        .success();
}

pub fn read_notes(dir: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(dir.join("notes.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

pub fn ids(dir: &Path) -> Vec<u64> {
    read_notes(dir)["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|note| note["id"].as_u64().unwrap())
        .collect()
}
