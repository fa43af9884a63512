//! Derives a default logger name from the function that creates the logger.
//!
//! Rust has no runtime access to the names of the functions on the call stack.
//! The macros [`caller_name!`](crate::caller_name) and [`logger!`](crate::logger) therefore
//! capture the path of the enclosing function at compile time.

/// Used if no name can be derived.
pub const UNKNOWN_NAME: &str = "unknown";

const MARKER: &str = "__vslog_caller";

/// Converts the type path of the marker function that [`caller_name!`](crate::caller_name)
/// defines into a short name of the enclosing function.
///
/// The last two path segments are kept and joined with a dot,
/// e.g. `my_crate::db::connect::__vslog_caller` becomes `db.connect`.
/// Closure segments are skipped.
#[doc(hidden)]
#[must_use]
pub fn short_name_from_type_path(type_path: &str) -> String {
    let segments: Vec<&str> = type_path
        .split("::")
        .filter(|s| !s.is_empty() && *s != MARKER && *s != "{{closure}}")
        .collect();
    match segments.as_slice() {
        [] => UNKNOWN_NAME.to_string(),
        [single] => (*single).to_string(),
        [.., parent, last] => format!("{parent}.{last}"),
    }
}

/// Evaluates to the short name of the enclosing function, as `String`.
///
/// See [`short_name_from_type_path`] for the format.
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn __vslog_caller() {}
        $crate::caller::short_name_from_type_path(::std::any::type_name_of_val(&__vslog_caller))
    }};
}

/// Creates a [`Logger`](crate::Logger), optionally with a name.
///
/// Without name, the short name of the enclosing function is used
/// (see [`caller_name!`](crate::caller_name)).
/// Only the module and the function name are part of it, so e.g. `a::db::connect` and
/// `b::db::connect` both get the name `db.connect` and share one log directory;
/// pass an explicit name to keep such loggers apart.
///
/// ```rust
/// use vslog::{logger, Sinks};
///
/// fn connect() {
///     // writes to logs/<module>.connect/<DD-MM-YYYY>.log
///     let log = logger!(Sinks::CONSOLE_OUT | Sinks::FILE).unwrap();
///     log.info("connecting");
/// }
/// ```
#[macro_export]
macro_rules! logger {
    ($sinks:expr) => {
        $crate::Logger::try_new($sinks, &$crate::caller_name!())
    };
    ($sinks:expr, $name:expr) => {
        $crate::Logger::try_new($sinks, $name)
    };
}

#[cfg(test)]
mod test {
    use super::{short_name_from_type_path, UNKNOWN_NAME};

    #[test]
    fn keeps_last_two_segments() {
        assert_eq!(
            short_name_from_type_path("app::db::connect::__vslog_caller"),
            "db.connect"
        );
        assert_eq!(
            short_name_from_type_path("app::worker::run::{{closure}}::__vslog_caller"),
            "worker.run"
        );
        assert_eq!(short_name_from_type_path("main::__vslog_caller"), "main");
        assert_eq!(short_name_from_type_path("__vslog_caller"), UNKNOWN_NAME);
        assert_eq!(short_name_from_type_path(""), UNKNOWN_NAME);
    }

    #[test]
    fn same_module_and_function_name_collide() {
        assert_eq!(
            short_name_from_type_path("a::db::connect::__vslog_caller"),
            short_name_from_type_path("b::db::connect::__vslog_caller")
        );
    }

    #[test]
    fn macro_names_this_function() {
        assert_eq!(crate::caller_name!(), "test.macro_names_this_function");
    }
}
