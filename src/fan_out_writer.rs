use crate::{
    deferred_now::DeferredNow,
    file_spec::FileSpec,
    sinks::{StdStream, StdStreamLock},
    util::{eprint_err, ErrorChannel, ErrorCode},
    Sinks,
};
use std::{fs::File, io::Write, path::PathBuf};

/// Describes how the file sink deals with its file handle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FileHandling {
    /// The file is opened, appended to, and closed again for every log line (default).
    ///
    /// No handle is kept between two calls, so there is no stale handle after
    /// midnight, or after the file was removed externally.
    #[default]
    ReopenPerWrite,
    /// The file handle is kept open between calls.
    ///
    /// The path is still resolved for every line, and a new file is opened
    /// as soon as the date changes.
    /// [`Logger::release`](crate::Logger::release) closes the handle.
    KeepOpen,
}

// The file part of the fan-out writer.
struct FileSink {
    file_spec: FileSpec,
    handling: FileHandling,
    o_open: Option<(File, PathBuf)>,
}

enum FileSinkError {
    Open(std::io::Error),
    Write(std::io::Error),
}

impl FileSink {
    fn write(&mut self, now: &mut DeferredNow, line: &[u8]) -> Result<(), FileSinkError> {
        match self.handling {
            FileHandling::ReopenPerWrite => {
                let (mut file, _path) =
                    self.file_spec.resolve(now).map_err(FileSinkError::Open)?;
                file.write_all(line).map_err(FileSinkError::Write)
            }
            FileHandling::KeepOpen => {
                let path = self.file_spec.as_pathbuf(now);
                let file = match &mut self.o_open {
                    Some((file, open_path)) if *open_path == path => file,
                    o_open => {
                        // the date has changed, or nothing is open yet
                        *o_open = None;
                        let open = self.file_spec.resolve(now).map_err(FileSinkError::Open)?;
                        &mut o_open.insert(open).0
                    }
                };
                let result = file.write_all(line);
                if result.is_err() {
                    // start over with a fresh handle on the next call
                    self.o_open = None;
                }
                result.map_err(FileSinkError::Write)
            }
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.o_open {
            Some((ref mut file, _)) => file.flush(),
            None => Ok(()),
        }
    }

    fn release(&mut self) {
        self.o_open = None;
    }
}

// Delivers the same formatted line to all selected sinks.
//
// A failure on one sink never prevents the delivery to the others,
// and is reported on the error channel, never to the caller.
pub(crate) struct FanOutWriter {
    console: Vec<StdStream>,
    o_file: Option<FileSink>,
    error_channel: ErrorChannel,
}

impl FanOutWriter {
    pub(crate) fn new(
        sinks: Sinks,
        file_spec: FileSpec,
        handling: FileHandling,
        error_channel: ErrorChannel,
    ) -> Self {
        FanOutWriter {
            console: sinks.console_streams(),
            o_file: sinks.contains(Sinks::FILE).then_some(FileSink {
                file_spec,
                handling,
                o_open: None,
            }),
            error_channel,
        }
    }

    pub(crate) fn error_channel(&self) -> &ErrorChannel {
        &self.error_channel
    }

    pub(crate) fn write(&mut self, now: &mut DeferredNow, line: &[u8]) {
        self.write_to_console(line);
        self.write_to_file(now, line);
    }

    // Holds the locks of all selected console streams while writing,
    // so that no other output of this process can get between the copies of the line.
    fn write_to_console(&self, line: &[u8]) {
        if self.console.is_empty() {
            return;
        }
        let mut locks: Vec<StdStreamLock> = self.console.iter().map(StdStream::lock).collect();
        for (lock, stream) in locks.iter_mut().zip(&self.console) {
            if let Err(e) = lock.write_all(line).and_then(|()| lock.flush()) {
                eprint_err(
                    &self.error_channel,
                    ErrorCode::Write,
                    &format!("writing log line to {} failed", stream.name()),
                    &e,
                );
            }
        }
    }

    fn write_to_file(&mut self, now: &mut DeferredNow, line: &[u8]) {
        if let Some(ref mut file_sink) = self.o_file {
            match file_sink.write(now, line) {
                Ok(()) => {}
                Err(FileSinkError::Open(e)) => {
                    eprint_err(
                        &self.error_channel,
                        ErrorCode::LogFile,
                        "can't open log file",
                        &e,
                    );
                }
                Err(FileSinkError::Write(e)) => {
                    eprint_err(
                        &self.error_channel,
                        ErrorCode::Write,
                        "writing log line to file failed",
                        &e,
                    );
                }
            }
        }
    }

    pub(crate) fn flush(&mut self) {
        for stream in &self.console {
            if let Err(e) = stream.lock().flush() {
                eprint_err(
                    &self.error_channel,
                    ErrorCode::Flush,
                    &format!("flushing {} failed", stream.name()),
                    &e,
                );
            }
        }
        if let Some(ref mut file_sink) = self.o_file {
            if let Err(e) = file_sink.flush() {
                eprint_err(
                    &self.error_channel,
                    ErrorCode::Flush,
                    "flushing log file failed",
                    &e,
                );
            }
        }
    }

    pub(crate) fn release(&mut self) {
        if let Some(ref mut file_sink) = self.o_file {
            file_sink.release();
        }
    }

    #[cfg(test)]
    fn holds_open_file(&self) -> Option<&PathBuf> {
        self.o_file
            .as_ref()
            .and_then(|fs| fs.o_open.as_ref())
            .map(|(_, path)| path)
    }
}
