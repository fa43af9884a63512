use chrono::{DateTime, Local};

// Timestamp of a log line, e.g. `18-10-2026 14:03:59`.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
// Date partition of a log file, e.g. `18-10-2026`.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Deferred timestamp creation.
///
/// Is used to ensure that a log record that is sent to multiple sinks
/// always uses the same timestamp, and that the date partition of the log file
/// matches the date that is printed in the line.
#[derive(Debug, Default)]
pub(crate) struct DeferredNow(Option<DateTime<Local>>);

impl DeferredNow {
    pub(crate) fn new() -> Self {
        Self(None)
    }

    #[cfg(test)]
    pub(crate) fn new_from_datetime(dt: DateTime<Local>) -> Self {
        Self(Some(dt))
    }

    // The first caller generates the timestamp.
    pub(crate) fn now(&mut self) -> &DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    pub(crate) fn format_timestamp(&mut self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }

    pub(crate) fn format_date(&mut self) -> String {
        self.now().format(DATE_FORMAT).to_string()
    }
}
