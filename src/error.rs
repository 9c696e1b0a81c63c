//! Error types for linecore.
//!
//! The taxonomy is deliberately small. A missing file on load is not an
//! error (the document starts empty), and an out-of-range buffer access is
//! a contract violation handled by debug assertions, not by this type.

use std::fmt;
use std::io;

/// Result type alias for linecore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for linecore operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from document persistence.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
