#!/usr/bin/env rust-script
//! Runs the checks that a release of vslog must pass, then cleans up.
use std::process::{exit, Command};

fn run(cmd: &str) {
    println!("\n> {cmd}");
    let mut chips = cmd.split(' ');
    let status = Command::new(chips.next().unwrap())
        .args(chips)
        .status()
        .unwrap();
    if !status.success() {
        println!("> qualify terminates due to error");
        exit(-1);
    }
}

fn main() {
    run("cargo fmt --check");
    run("cargo +1.85.0 test");
    run("cargo clippy -- -D warnings");
    run("cargo +nightly clippy --all-targets -- -D warnings");
    run("cargo test --release");
    run("cargo +nightly bench");
    run("cargo doc --no-deps");
    run("cargo script ./scripts/cleanup.rs");
}
