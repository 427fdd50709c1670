#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const NOW: &str = "2025-10-15 16:00";

pub fn qlo() -> Command {
    let mut cmd = cargo_bin_cmd!("quelio");
    cmd.env_remove("QUELIO_PASSWORD")
        .env_remove("QUELIO_PWD")
        .env_remove("QUELIO_LOG");
    cmd
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

pub fn punches(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("quelio_{}_{}.{}", name, std::process::id(), ext));
    fs::remove_file(&path).ok();
    path
}

/// Monday 13 to Wednesday 15 October 2025, plus the Friday of the week before.
/// Wednesday is still open at 13:00.
pub const WEEK_PAYLOAD: &str = r#"{
  "hours": {
    "10-10-2025": ["08:00", "12:00"],
    "13-10-2025": ["08:00", "12:00", "13:00", "17:00"],
    "14-10-2025": ["08:30", "12:00", "13:00", "16:30"],
    "15-10-2025": [" 08:00", "12:00 ", "13:00"]
  },
  "total_effective": "22:00",
  "total_paid": "22:42"
}"#;

pub fn write_payload(name: &str, content: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, content).expect("write payload");
    path.to_string_lossy().to_string()
}

/// A config path that does not exist.
pub fn missing_config(name: &str) -> String {
    temp_path(name, "conf").to_string_lossy().to_string()
}
