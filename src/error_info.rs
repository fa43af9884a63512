//! Diagnostics of `vslog`.
//!
//! Logging calls never return errors to their caller. Problems that occur while a line is
//! written are instead reported as a single line on the [`ErrorChannel`](crate::ErrorChannel),
//! which is stderr unless configured otherwise with
//! [`LoggerBuilder::error_channel`](crate::LoggerBuilder::error_channel).
//! Each diagnostic line starts with `[vslog]` and an error code.
//! More details on the codes can be found here.
//!
//! ## `LogFile`
//!
//! The log file of the current day could not be opened, or its directory could not be created.
//! The log line is lost for the file sink, but was still written to the console sinks.
//!
//! Example:
//!
//! ```text
//! [vslog][ERRCODE::LogFile] can't open log file, caused by Not a directory (os error 20)
//! ```
//!
//! Typical causes are missing permissions, a full disk, or a regular file
//! that occupies the path of the log directory.
//!
//! ## `Write`
//!
//! Writing the log line to one of the sinks failed.
//!
//! Example:
//!
//! ```text
//! [vslog][ERRCODE::Write] writing log line to stdout failed, caused by Broken pipe (os error 32)
//! ```
//!
//! ## `Flush`
//!
//! Explicit flushing with [`Logger::flush`](crate::Logger::flush) failed.
//!
//! ## `Poison`
//!
//! Log lines can be written by all threads of your program, the writer of a logger is thus
//! protected by a `Mutex`. In case that a thread panics while owning this lock, the lock is
//! subsequently considered "poisoned". `vslog` reports this once and continues to write.
