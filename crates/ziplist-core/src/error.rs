//! Error types for listing capture and transformation

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for listing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for listing operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The listing program could not be started
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying spawn error
        source: io::Error,
    },

    /// The listing program exited unsuccessfully (strict mode only)
    #[error("`{program}` exited with {status}: {stderr}")]
    CommandFailed {
        /// Program that was run
        program: String,
        /// Exit status reported by the OS
        status: ExitStatus,
        /// Captured standard error, lossily decoded
        stderr: String,
    },

    /// Captured listing text is not valid UTF-8
    #[error("Listing is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// A data row lacks one of the layout's literal delimiters
    #[error("Line {line}: delimiter {delimiter:?} not found in {content:?}")]
    MissingDelimiter {
        /// 1-based line (or zip entry) number
        line: usize,
        /// The delimiter that was searched for
        delimiter: String,
        /// The offending row
        content: String,
    },

    /// Layout settings that cannot describe any listing
    #[error("Invalid listing layout: {0}")]
    InvalidLayout(String),

    /// Zip stream could not be decoded
    #[error("Zip stream error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// Create a new MissingDelimiter error
    pub fn missing_delimiter<D: Into<String>, C: Into<String>>(
        line: usize,
        delimiter: D,
        content: C,
    ) -> Self {
        Self::MissingDelimiter {
            line,
            delimiter: delimiter.into(),
            content: content.into(),
        }
    }

    /// Create a new InvalidLayout error
    pub fn invalid_layout<S: Into<String>>(msg: S) -> Self {
        Self::InvalidLayout(msg.into())
    }
}
