/// Writes a line with severity DEBUG, interpolating the arguments like `format!`.
///
/// ```rust
/// # let logger = vslog::Logger::try_new(vslog::Sinks::CONSOLE_OUT, "doc").unwrap();
/// vslog::debugf!(logger, "cache has {} entries", 17);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Writes a line with severity INFO; see [`debugf!`](crate::debugf).
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Writes a line with severity WARNING; see [`debugf!`](crate::debugf).
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

/// Writes a line with severity ERROR; see [`debugf!`](crate::debugf).
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}
