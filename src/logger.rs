use crate::{
    caller::UNKNOWN_NAME,
    deferred_now::DeferredNow,
    fan_out_writer::{FanOutWriter, FileHandling},
    file_spec::{validate_name, FileSpec, DEFAULT_DIRECTORY},
    util::{buffer_with, eprint_msg, ErrorChannel, ErrorCode},
    Severity, Sinks, VslogError,
};
use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

/// A leveled logger that writes each line to all of its [`Sinks`].
///
/// A `Logger` is a cheap handle; clones share the same configuration and the same lock,
/// so lines from concurrent threads never interleave, and appear in every sink in
/// the same order.
///
/// None of the logging methods returns an error or panics. If the log file cannot be
/// written, the line still reaches the console sinks, and a diagnostic line is written
/// to the [`ErrorChannel`].
///
/// ## Example
///
/// ```rust
/// use vslog::{Logger, Sinks};
///
/// let logger = Logger::try_new(Sinks::CONSOLE_OUT | Sinks::FILE, "billing").unwrap();
/// logger.info("service started");
/// vslog::warningf!(logger, "{} retries left", 3);
/// ```
#[derive(Clone)]
pub struct Logger(Arc<LoggerState>);

struct LoggerState {
    name: String,
    sinks: Sinks,
    file_spec: FileSpec,
    writer: Mutex<FanOutWriter>,
}

impl Logger {
    /// Creates a logger with the given sinks and name, and with default settings otherwise.
    ///
    /// The log file, if any, is `logs/<name>/<DD-MM-YYYY>.log`.
    ///
    /// # Errors
    ///
    /// [`VslogError::InvalidName`] if the name cannot be used as directory name.
    pub fn try_new<S: Into<Sinks>>(sinks: S, name: &str) -> Result<Self, VslogError> {
        Self::builder(sinks).name(name).try_build()
    }

    /// Returns a builder for a logger with the given sinks.
    #[must_use]
    pub fn builder<S: Into<Sinks>>(sinks: S) -> LoggerBuilder {
        LoggerBuilder::new(sinks.into())
    }

    /// The name of the logger, which is also the name of its log directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The selected sinks.
    #[must_use]
    pub fn sinks(&self) -> Sinks {
        self.0.sinks
    }

    /// The directory that contains the daily log files.
    #[must_use]
    pub fn log_directory(&self) -> PathBuf {
        self.0.file_spec.log_directory()
    }

    /// The path of the log file that a line written now would go to,
    /// or `None` if the logger does not write to a file.
    #[must_use]
    pub fn current_log_file(&self) -> Option<PathBuf> {
        self.0
            .sinks
            .contains(Sinks::FILE)
            .then(|| self.0.file_spec.as_pathbuf(&mut DeferredNow::new()))
    }

    /// Writes a line with the given severity.
    pub fn emit(&self, severity: Severity, message: &str) {
        self.emit_at(&mut DeferredNow::new(), severity, message);
    }

    /// Writes a line with severity DEBUG.
    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    /// Writes a line with severity INFO.
    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    /// Writes a line with severity WARNING.
    pub fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    /// Writes a line with severity ERROR.
    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    /// Writes a line with severity DEBUG; use with `format_args!`,
    /// or use the macro [`debugf!`](crate::debugf).
    pub fn debugf(&self, args: fmt::Arguments) {
        self.emit_args(Severity::Debug, args);
    }

    /// Writes a line with severity INFO; see [`Logger::debugf`].
    pub fn infof(&self, args: fmt::Arguments) {
        self.emit_args(Severity::Info, args);
    }

    /// Writes a line with severity WARNING; see [`Logger::debugf`].
    pub fn warningf(&self, args: fmt::Arguments) {
        self.emit_args(Severity::Warning, args);
    }

    /// Writes a line with severity ERROR; see [`Logger::debugf`].
    pub fn errorf(&self, args: fmt::Arguments) {
        self.emit_args(Severity::Error, args);
    }

    // The arguments are interpolated before the lock is taken.
    fn emit_args(&self, severity: Severity, args: fmt::Arguments) {
        match args.as_str() {
            Some(message) => self.emit(severity, message),
            None => self.emit(severity, &args.to_string()),
        }
    }

    pub(crate) fn emit_at(&self, now: &mut DeferredNow, severity: Severity, message: &str) {
        let timestamp = now.format_timestamp();
        // nothing below can log again, so the buffer is never borrowed twice
        buffer_with(|tl_buf| {
            let mut buffer = tl_buf.borrow_mut();
            format_line(&mut buffer, &timestamp, severity, message);
            self.lock_writer().write(now, &buffer);
            buffer.clear();
        });
    }

    /// Flushes the console streams and a file handle that is kept open.
    pub fn flush(&self) {
        self.lock_writer().flush();
    }

    /// Closes the file handle if one is kept open (see [`FileHandling::KeepOpen`]).
    ///
    /// The next log line will open the file again.
    pub fn release(&self) {
        self.lock_writer().release();
    }

    /// Installs a clone of this logger as the backend of the `log` facade,
    /// so that the macros `log::info!` etc. write to the sinks of this logger.
    ///
    /// `trace` lines are written with severity DEBUG.
    ///
    /// # Errors
    ///
    /// [`VslogError::Log`] if another backend was already installed.
    pub fn start(&self) -> Result<(), VslogError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    // A writer that panicked while holding the lock is still usable,
    // so the poison is reported and cleared.
    fn lock_writer(&self) -> MutexGuard<'_, FanOutWriter> {
        match self.0.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let guard = poisoned.into_inner();
                eprint_msg(
                    guard.error_channel(),
                    ErrorCode::Poison,
                    "log writer lock was poisoned, continuing",
                );
                self.0.writer.clear_poison();
                guard
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.0.name)
            .field("sinks", &self.0.sinks)
            .finish_non_exhaustive()
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.emit_args(record.level().into(), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

// `<DD-MM-YYYY HH:MM:SS> | <LEVEL> | <message>\n`
fn format_line(buffer: &mut Vec<u8>, timestamp: &str, severity: Severity, message: &str) {
    // writing into a Vec cannot fail
    writeln!(buffer, "{timestamp} | {severity} | {message}").ok();
}

/// Builder for a [`Logger`].
///
/// Obtained with [`Logger::builder`].
///
/// ```rust
/// use vslog::{ErrorChannel, FileHandling, Logger, Sinks};
///
/// let logger = Logger::builder(Sinks::FILE)
///     .name("importer")
///     .directory("/var/log/myapp")
///     .file_handling(FileHandling::KeepOpen)
///     .error_channel(ErrorChannel::StdOut)
///     .try_build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct LoggerBuilder {
    sinks: Sinks,
    o_name: Option<String>,
    directory: PathBuf,
    file_handling: FileHandling,
    error_channel: ErrorChannel,
    create_dir_eagerly: bool,
}

impl LoggerBuilder {
    fn new(sinks: Sinks) -> Self {
        Self {
            sinks,
            o_name: None,
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            file_handling: FileHandling::default(),
            error_channel: ErrorChannel::default(),
            create_dir_eagerly: false,
        }
    }

    /// Sets the name of the logger.
    ///
    /// Without a name, the logger is called `unknown`;
    /// use the macro [`logger!`](crate::logger) to derive the name from the calling function.
    #[must_use]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.o_name = Some(name.into());
        self
    }

    /// Sets the root directory of the log files; default is `logs`.
    #[must_use]
    pub fn directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.directory = directory.as_ref().to_path_buf();
        self
    }

    /// Sets how the file handle is managed; default is [`FileHandling::ReopenPerWrite`].
    #[must_use]
    pub fn file_handling(mut self, file_handling: FileHandling) -> Self {
        self.file_handling = file_handling;
        self
    }

    /// Sets the channel for diagnostics of the logger itself; default is stderr.
    #[must_use]
    pub fn error_channel(mut self, error_channel: ErrorChannel) -> Self {
        self.error_channel = error_channel;
        self
    }

    /// Creates the log directory already when the logger is built, and fails the build
    /// if that is not possible.
    ///
    /// By default, the directory is created with the first line that is written to the file,
    /// and problems are only reported on the error channel.
    #[must_use]
    pub fn create_dir_eagerly(mut self, eagerly: bool) -> Self {
        self.create_dir_eagerly = eagerly;
        self
    }

    /// Creates the logger.
    ///
    /// # Errors
    ///
    /// [`VslogError::InvalidName`] if the name cannot be used as directory name.
    ///
    /// With `create_dir_eagerly(true)` and [`Sinks::FILE`]:
    /// [`VslogError::BadDirectory`] if the log directory path exists but is no directory,
    /// [`VslogError::Io`] if the directory cannot be created.
    pub fn try_build(self) -> Result<Logger, VslogError> {
        let name = self.o_name.unwrap_or_else(|| UNKNOWN_NAME.to_string());
        validate_name(&name)?;
        let file_spec = FileSpec::new(self.directory, name.clone());

        if self.create_dir_eagerly && self.sinks.contains(Sinks::FILE) {
            let p_directory = file_spec.log_directory();
            if p_directory.exists() && !p_directory.is_dir() {
                return Err(VslogError::BadDirectory);
            }
            file_spec.ensure_directory()?;
        }

        let writer = FanOutWriter::new(
            self.sinks,
            file_spec.clone(),
            self.file_handling,
            self.error_channel,
        );
        Ok(Logger(Arc::new(LoggerState {
            name,
            sinks: self.sinks,
            file_spec,
            writer: Mutex::new(writer),
        })))
    }
}
