#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "full_date,date,weekday,time,mood,activities,note_title,note\n";

pub fn daylio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daylio-import").unwrap();
    cmd.env_remove("EXIST_API_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a Daylio export with the given data rows and return its path
pub fn write_export(dir: &Path, rows: &[&str]) -> PathBuf {
    let mut data = HEADER.to_string();
    for row in rows {
        data.push_str(row);
        data.push('\n');
    }
    let path = dir.join("daylio_export.csv");
    fs::write(&path, data).unwrap();
    path
}

pub fn write_config(dir: &Path, filtered: &[&str]) {
    let list: Vec<String> = filtered.iter().map(|a| format!("\"{}\"", a)).collect();
    fs::write(
        dir.join("config.json"),
        format!("{{\"filter_activities\": [{}]}}", list.join(", ")),
    )
    .unwrap();
}

pub fn write_secrets(dir: &Path, token: &str) {
    fs::write(
        dir.join("secrets.json"),
        format!("{{\"developerAccessToken\": \"{}\"}}", token),
    )
    .unwrap();
}
