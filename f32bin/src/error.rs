//! Error types for value conversion.
//!
//! This module provides the [`Error`] enum covering the failure modes of
//! reading text values and writing binary records, along with a convenient
//! [`Result`] type alias.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting or decoding value files.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text file could not be opened for reading.
    #[error("{} could not be open", .path.display())]
    InputOpen {
        /// Path to the file that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output binary file could not be created.
    #[error("{} could not be created", .path.display())]
    OutputOpen {
        /// Path to the file that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A token could not be parsed as a floating-point value (strict mode).
    #[error("Malformed value '{token}' on line {line}")]
    Malformed {
        /// 1-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A binary record file whose size is not a whole number of records.
    #[error("Invalid record data: {len} bytes is not a multiple of 4")]
    InvalidLength {
        /// Length of the data in bytes.
        len: usize,
    },
}

impl Error {
    /// Create an InputOpen error for the given path.
    pub fn input_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an OutputOpen error for the given path.
    pub fn output_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a Malformed error.
    pub fn malformed(line: usize, token: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            token: token.into(),
        }
    }

    /// Check whether this error came from an unparsable token.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::input_open(
            "data/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "data/missing.txt could not be open");

        let err = Error::malformed(7, "abc");
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("line 7"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_open_errors_keep_source() {
        use std::error::Error as _;

        let err = Error::output_open(
            "/readonly/out.bin",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("could not be created"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
    }
}
