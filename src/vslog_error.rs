use thiserror::Error;

/// Describes errors in the initialization of a [`Logger`](crate::Logger).
///
/// Logging calls themselves never return errors; failures during writing are reported on the
/// [`ErrorChannel`](crate::ErrorChannel) instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VslogError {
    /// The logger name cannot be used as a directory name.
    #[error("invalid logger name {0:?}: must be non-empty and must not contain path separators")]
    InvalidName(String),

    /// The log directory exists but is not a directory.
    #[error("log output path is not a directory")]
    BadDirectory,

    /// Preparing the log directory failed.
    #[error("log directory cannot be prepared")]
    Io(#[from] std::io::Error),

    /// Installing the logger as global `log` backend failed.
    #[error("logger initialization failed")]
    Log(#[from] log::SetLoggerError),
}
