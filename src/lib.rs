#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
//! A minimal leveled logger that writes timestamped lines to stdout, stderr,
//! and/or to one log file per calendar day.
//!
//! ```rust
//! use vslog::{Logger, Sinks};
//!
//! let logger = Logger::try_new(Sinks::CONSOLE_OUT | Sinks::FILE, "server").unwrap();
//! logger.info("listening on port 8080");
//! vslog::errorf!(logger, "connection from {} refused", "10.0.0.7");
//! ```
//!
//! produces on stdout and in `logs/server/<DD-MM-YYYY>.log`
//!
//! ```text
//! 18-10-2026 14:03:59 | INFO | listening on port 8080
//! 18-10-2026 14:03:59 | ERROR | connection from 10.0.0.7 refused
//! ```
//!
//! The [`Sinks`] of a logger decide where its lines go.
//! Each line is written to all selected sinks while the logger's lock is held,
//! so lines from concurrent threads never interleave.
//!
//! The log file is resolved anew for every line, using the local date of the line's timestamp.
//! The output thus rolls over to a new file at local midnight, without any timer thread.
//! The directory `logs/<name>` is created when the first line is written.
//!
//! Logging calls never fail and never panic. If the file cannot be written,
//! the line still reaches the console sinks, and a diagnostic line is written
//! to stderr (see [`error_info`]).
//!
//! Use the macro [`logger!`] to name the logger after the function that creates it,
//! and [`Logger::start`] to make it the backend of the `log` facade.

pub mod caller;
mod deferred_now;
pub mod error_info;
mod fan_out_writer;
mod file_spec;
mod logger;
mod macros;
mod severity;
mod sinks;
mod util;
mod vslog_error;

pub use crate::fan_out_writer::FileHandling;
pub use crate::file_spec::DEFAULT_DIRECTORY;
pub use crate::logger::{Logger, LoggerBuilder};
pub use crate::severity::Severity;
pub use crate::sinks::Sinks;
pub use crate::util::ErrorChannel;
pub use crate::vslog_error::VslogError;

/// Raw flag for [`Sinks::CONSOLE_OUT`].
pub const CONSOLE_OUT: u8 = 1;
/// Raw flag for [`Sinks::CONSOLE_ERR`].
pub const CONSOLE_ERR: u8 = 2;
/// Raw flag for [`Sinks::FILE`].
pub const FILE: u8 = 4;
