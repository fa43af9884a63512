use crate::{deferred_now::DeferredNow, VslogError};
use std::{
    fs::{DirBuilder, File, OpenOptions},
    path::{Path, PathBuf},
};

/// Root directory of all log files if nothing else is configured.
pub const DEFAULT_DIRECTORY: &str = "logs";
const SUFFIX: &str = "log";

// Resolves the log file of a logger: `<directory>/<name>/<DD-MM-YYYY>.log`.
//
// The date is taken from the record that is written, not from the construction of the
// logger, so the output rolls over to a new file at local midnight.
#[derive(Clone, Debug)]
pub(crate) struct FileSpec {
    directory: PathBuf,
    name: String,
}

impl FileSpec {
    pub(crate) fn new(directory: PathBuf, name: String) -> Self {
        Self { directory, name }
    }

    pub(crate) fn log_directory(&self) -> PathBuf {
        self.directory.join(&self.name)
    }

    pub(crate) fn as_pathbuf(&self, now: &mut DeferredNow) -> PathBuf {
        self.log_directory().join(format!("{}.{SUFFIX}", now.format_date()))
    }

    // Creates the log directory if necessary; a directory that already exists,
    // maybe created concurrently by someone else, is fine.
    pub(crate) fn ensure_directory(&self) -> Result<PathBuf, std::io::Error> {
        let p_directory = self.log_directory();
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(&p_directory)?;
        Ok(p_directory)
    }

    // Opens today's file for appending, with all directories that are needed.
    pub(crate) fn resolve(&self, now: &mut DeferredNow) -> Result<(File, PathBuf), std::io::Error> {
        self.ensure_directory()?;
        let path = self.as_pathbuf(now);
        let file = open_log_file(&path)?;
        Ok((file, path))
    }
}

fn open_log_file(path: &Path) -> Result<File, std::io::Error> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o660);
    }
    options.open(path)
}

// The name becomes a single directory level below the root directory.
pub(crate) fn validate_name(name: &str) -> Result<(), VslogError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
    {
        Err(VslogError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}
