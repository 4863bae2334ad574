//! Unified error types for pkgdelta.
//!
//! The core never performs I/O, so most of these errors originate at the
//! source-acquisition boundary and propagate straight to the process exit.
//! The one exception is descriptor parsing, whose errors are routinely
//! logged and swallowed by callers — a bad line in an inventory is not a
//! reason to abort a comparison.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pkgdelta operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PkgDeltaError {
    /// Errors while parsing a package descriptor
    #[error("failed to parse {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while acquiring an inventory from a source
    #[error("failed to load inventory from {context}")]
    Source {
        context: String,
        #[source]
        source: SourceErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific descriptor parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("expected name-version-release.arch")]
    MalformedDescriptor,

    #[error("architecture must start with a lowercase letter and contain only [a-z0-9_]")]
    InvalidArchitecture,
}

/// Specific source acquisition error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SourceErrorKind {
    #[error("no package inventory found")]
    NoInventory,

    #[error("archive read failed: {0}")]
    Archive(String),

    #[error("directory walk failed: {0}")]
    Walk(String),
}

/// Convenient Result type for pkgdelta operations
pub type Result<T> = std::result::Result<T, PkgDeltaError>;

impl PkgDeltaError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a source error with context
    pub fn source(context: impl Into<String>, source: SourceErrorKind) -> Self {
        Self::Source {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for PkgDeltaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PkgDeltaError::io("/var/log/rpm.txt", io_err);
        assert!(err.to_string().contains("/var/log/rpm.txt"));
    }

    #[test]
    fn parse_error_carries_kind() {
        let err = PkgDeltaError::parse("descriptor \"foo\"", ParseErrorKind::MalformedDescriptor);
        let display = err.to_string();
        assert!(display.contains("descriptor"), "got: {display}");
    }

    #[test]
    fn source_error_display() {
        let err = PkgDeltaError::source("bundle.tar.gz", SourceErrorKind::NoInventory);
        assert!(err.to_string().contains("bundle.tar.gz"));
    }
}
