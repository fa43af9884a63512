use std::{cell::RefCell, fs::OpenOptions, io::Write, path::PathBuf};

const DIAGNOSTIC_TAG: &str = "[vslog]";

/// Specifies the target for messages about issues of `vslog` itself.
///
/// Failures that happen while a log line is written are never returned to the caller of
/// the logging method. Instead, a single diagnostic line is written to the error channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorChannel {
    /// Write diagnostics to stderr (default).
    #[default]
    StdErr,
    /// Write diagnostics to stdout.
    StdOut,
    /// Append diagnostics to the given file.
    File(PathBuf),
    /// Don't write diagnostics at all.
    DevNull,
}

// Classifies the diagnostics; see module error_info for details.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
    LogFile,
    Poison,
}

pub(crate) fn eprint_err(
    channel: &ErrorChannel,
    error_code: ErrorCode,
    msg: &str,
    err: &dyn std::error::Error,
) {
    let s = format!("{DIAGNOSTIC_TAG}[ERRCODE::{error_code:?}] {msg}, caused by {err}");
    try_to_write(channel, &s);
}

pub(crate) fn eprint_msg(channel: &ErrorChannel, error_code: ErrorCode, msg: &str) {
    let s = format!("{DIAGNOSTIC_TAG}[ERRCODE::{error_code:?}] {msg}");
    try_to_write(channel, &s);
}

// The error channel is the last resort, so failures to write to it are swallowed.
fn try_to_write(channel: &ErrorChannel, s: &str) {
    match channel {
        ErrorChannel::StdErr => {
            writeln!(std::io::stderr(), "{s}").ok();
        }
        ErrorChannel::StdOut => {
            writeln!(std::io::stdout(), "{s}").ok();
        }
        ErrorChannel::File(path) => {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                writeln!(file, "{s}").ok();
            }
        }
        ErrorChannel::DevNull => {}
    }
}

// Thread-local buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}
