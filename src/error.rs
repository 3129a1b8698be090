//! Error types for ghostline.

use std::fmt;
use std::io;

/// Result type alias for ghostline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ghostline operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Suggestion provider failure.
    ///
    /// The editor downgrades this to an empty candidate list; it exists so
    /// provider implementations have something to return.
    Provider(String),
    /// Grid dimension error (e.g., zero width/height).
    InvalidDimensions { width: u16, height: u16 },
}

impl Error {
    /// Whether this error is a transient read failure worth retrying.
    ///
    /// The editor loop retries transient key-source errors without mutating
    /// any session state; everything else aborts the session.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Provider(s) => write!(f, "suggestion provider failed: {s}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
