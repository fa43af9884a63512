#![allow(dead_code)]

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process::{Command, Output},
};

const CTRL_INDEX: &str = "CTRL_INDEX";
const CTRL_DIR: &str = "CTRL_DIR";

pub fn dir() -> temp_dir::TempDir {
    temp_dir::TempDir::new().unwrap()
}

// Returns the value of CTRL_INDEX if we are running as child process.
pub fn child_index() -> Option<u8> {
    std::env::var(CTRL_INDEX).ok().map(|value| {
        println!("executor {value}");
        value.parse().unwrap()
    })
}

// The working directory that the parent process handed over to the child.
pub fn child_dir() -> PathBuf {
    PathBuf::from(std::env::var(CTRL_DIR).unwrap())
}

// Launches the given test of the same executable as child process, with CTRL_INDEX and
// CTRL_DIR set, and returns its captured output.
pub fn run_child(test_name: &str, value: u8, dir: &Path) -> Output {
    let output = Command::new(std::env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CTRL_INDEX, value.to_string())
        .env(CTRL_DIR, dir)
        .output()
        .expect("Command failed to start");
    assert!(
        output.status.success(),
        "child process failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

// All lines of the output that contain the given pattern.
pub fn matching_lines(output: &[u8], pattern: &str) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| line.contains(pattern))
        .map(ToString::to_string)
        .collect()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    let file = File::open(path)
        .unwrap_or_else(|e| panic!("Cannot open file {} due to {e}", path.display()));
    BufReader::new(file).lines().map(Result::unwrap).collect()
}

// Checks the format `DD-MM-YYYY HH:MM:SS | LEVEL | message` and returns level and message.
pub fn split_line(line: &str) -> (&str, &str) {
    let mut parts = line.splitn(3, " | ");
    let timestamp = parts.next().unwrap();
    let level = parts.next().unwrap_or_else(|| panic!("irregular line {line:?}"));
    let message = parts.next().unwrap_or_else(|| panic!("irregular line {line:?}"));
    assert_eq!(timestamp.len(), 19, "irregular timestamp in {line:?}");
    let bytes = timestamp.as_bytes();
    for (idx, sep) in [(2, b'-'), (5, b'-'), (10, b' '), (13, b':'), (16, b':')] {
        assert_eq!(bytes[idx], sep, "irregular timestamp in {line:?}");
    }
    assert!(
        ["DEBUG", "INFO", "WARNING", "ERROR"].contains(&level),
        "irregular level in {line:?}"
    );
    (level, message)
}
