#!/usr/bin/env rust-script
//! Cleans up all files and folders that were produced by test and bench runs.
//!
//! ```cargo
//! [dependencies]
//! glob = "*"
//! ```
extern crate glob;

fn main() {
    for pattern in &["./logs/**/*.log", "./log_files/**/*.log"] {
        for globresult in glob::glob(pattern).unwrap() {
            match globresult {
                Err(e) => eprintln!("Evaluating pattern {pattern:?} produced error {e}"),
                Ok(pathbuf) => {
                    std::fs::remove_file(&pathbuf).unwrap();
                }
            }
        }
    }

    for dir_pattern in ["./logs/**", "./log_files/**"] {
        let dirs: Vec<std::path::PathBuf> = glob::glob(dir_pattern)
            .unwrap()
            .filter_map(|r| match r {
                Err(e) => {
                    eprintln!("Searching for folders produced error {e}");
                    None
                }
                Ok(pathbuf) => Some(pathbuf),
            })
            .collect();
        for pathbuf in dirs.iter().rev() {
            std::fs::remove_dir(pathbuf).ok();
        }
    }

    std::fs::remove_dir("./logs/").ok();
    std::fs::remove_dir("./log_files/").ok();
}
