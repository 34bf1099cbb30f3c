//! Application error types.
//!
//! Every failure carries enough context (the offending path or stream) to be
//! reported to the user as-is.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Where an IO error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A file on disk.
    Path(PathBuf),
    /// Standard input.
    Stdin,
    /// Standard output.
    Stdout,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
            Self::Stdout => f.write_str("stdout"),
        }
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

/// Application error types
#[derive(Debug, Error)]
pub enum Error {
    /// The input word list does not exist
    #[error("word list not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// IO error with location context. The underlying error is exposed as
    /// the source, not repeated in the message.
    #[error("IO error on {location}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File or stream where the error occurred.
        location: Location,
    },

    /// Malformed command line
    #[error("{0}")]
    Argument(String),
}

impl Error {
    /// Create an IO error with location context
    pub fn io(source: std::io::Error, location: impl Into<Location>) -> Self {
        Self::Io { source, location: location.into() }
    }

    /// Create an argument error
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Argument(_) => 2,
            Self::NotFound { .. } | Self::Io { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn broken_pipe() -> std::io::Error {
        std::io::Error::from(std::io::ErrorKind::BrokenPipe)
    }

    #[test]
    fn not_found_names_the_path() {
        let err = Error::NotFound { path: PathBuf::from("words.txt") };
        assert_eq!(err.to_string(), "word list not found: words.txt");
    }

    #[test]
    fn io_message_names_stream_or_path() {
        assert_eq!(Error::io(broken_pipe(), Location::Stdout).to_string(), "IO error on stdout");
        assert_eq!(Error::io(broken_pipe(), Location::Stdin).to_string(), "IO error on stdin");
        assert_eq!(
            Error::io(broken_pipe(), PathBuf::from("out/combos.txt")).to_string(),
            "IO error on out/combos.txt"
        );
    }

    #[test]
    fn io_source_reported_once_in_chain() {
        let err = anyhow::Error::new(Error::io(broken_pipe(), Location::Stdout))
            .context("failed to write combinations");
        let rendered = format!("{err:#}");
        let cause = broken_pipe().to_string();

        assert!(rendered.starts_with("failed to write combinations: IO error on stdout: "));
        assert_eq!(rendered.matches(&cause).count(), 1, "rendered: {rendered}");
    }

    #[test]
    fn argument_errors_exit_with_usage_status() {
        assert_eq!(Error::argument("bad flag").exit_code(), 2);
        assert_eq!(Error::NotFound { path: PathBuf::new() }.exit_code(), 1);
    }
}
