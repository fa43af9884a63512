use std::{
    fmt,
    io::{Error as IoError, Stderr, StderrLock, Stdout, StdoutLock, Write},
    ops::{BitOr, BitOrAssign},
};

/// Selects the destinations of a [`Logger`](crate::Logger).
///
/// Combine the flags with `|`:
///
/// ```rust
/// use vslog::Sinks;
/// let sinks = Sinks::CONSOLE_OUT | Sinks::FILE;
/// assert_eq!(sinks.bits(), 5);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sinks(u8);

impl Sinks {
    /// Write to stdout.
    pub const CONSOLE_OUT: Sinks = Sinks(crate::CONSOLE_OUT);
    /// Write to stderr.
    pub const CONSOLE_ERR: Sinks = Sinks(crate::CONSOLE_ERR);
    /// Write to the log file of the current day.
    pub const FILE: Sinks = Sinks(crate::FILE);

    const KNOWN_BITS: u8 = crate::CONSOLE_OUT | crate::CONSOLE_ERR | crate::FILE;

    /// Interprets a raw bitmask.
    ///
    /// Unknown bits are ignored. If no known bit is set, `CONSOLE_OUT` is used.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        match bits & Self::KNOWN_BITS {
            0 => Self::CONSOLE_OUT,
            known => Self(known),
        }
    }

    /// The raw bitmask.
    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if all flags of `other` are set in `self`.
    #[must_use]
    pub fn contains(self, other: Sinks) -> bool {
        self.0 & other.0 == other.0
    }

    // The console streams that are selected, stdout first.
    pub(crate) fn console_streams(self) -> Vec<StdStream> {
        let mut streams = Vec::with_capacity(2);
        if self.contains(Self::CONSOLE_OUT) {
            streams.push(StdStream::Out(std::io::stdout()));
        }
        if self.contains(Self::CONSOLE_ERR) {
            streams.push(StdStream::Err(std::io::stderr()));
        }
        streams
    }
}

impl Default for Sinks {
    fn default() -> Self {
        Self::CONSOLE_OUT
    }
}

impl From<u8> for Sinks {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl BitOr for Sinks {
    type Output = Sinks;
    fn bitor(self, rhs: Sinks) -> Sinks {
        Sinks(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sinks {
    fn bitor_assign(&mut self, rhs: Sinks) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Sinks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = [
            (Self::CONSOLE_OUT, "CONSOLE_OUT"),
            (Self::CONSOLE_ERR, "CONSOLE_ERR"),
            (Self::FILE, "FILE"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "Sinks({})", names.join(" | "))
    }
}

// Abstraction over stdout and stderr
pub(crate) enum StdStream {
    Out(Stdout),
    Err(Stderr),
}
impl StdStream {
    pub(crate) fn lock(&self) -> StdStreamLock<'_> {
        match self {
            StdStream::Out(ref s) => StdStreamLock::Out(s.lock()),
            StdStream::Err(ref s) => StdStreamLock::Err(s.lock()),
        }
    }
    pub(crate) fn name(&self) -> &'static str {
        match self {
            StdStream::Out(_) => "stdout",
            StdStream::Err(_) => "stderr",
        }
    }
}

pub(crate) enum StdStreamLock<'a> {
    Out(StdoutLock<'a>),
    Err(StderrLock<'a>),
}
impl Write for StdStreamLock<'_> {
    fn write(&mut self, buffer: &[u8]) -> std::result::Result<usize, IoError> {
        match self {
            StdStreamLock::Out(l) => l.write(buffer),
            StdStreamLock::Err(l) => l.write(buffer),
        }
    }
    fn flush(&mut self) -> std::result::Result<(), IoError> {
        match self {
            StdStreamLock::Out(l) => l.flush(),
            StdStreamLock::Err(l) => l.flush(),
        }
    }
}
