//! Error types for subscriber export ingestion.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort loading an export file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Input file exists but cannot be opened.
    #[error("permission denied reading {path}")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure while reading.
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed delimited data.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        if !source.is_io_error() {
            return Self::Csv {
                path: path.to_path_buf(),
                source,
            };
        }
        match source.into_kind() {
            csv::ErrorKind::Io(io_err) => Self::open(path, io_err),
            kind => Self::Io {
                path: path.to_path_buf(),
                source: io::Error::other(format!("{kind:?}")),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NotFound {
            path: PathBuf::from("/path/to/members.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/members.csv");
    }

    #[test]
    fn open_errors_are_classified() {
        let path = Path::new("members.csv");
        let missing = IngestError::open(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, IngestError::NotFound { .. }));
        let denied = IngestError::open(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, IngestError::PermissionDenied { .. }));
        let other = IngestError::open(path, io::Error::other("disk on fire"));
        assert!(matches!(other, IngestError::Io { .. }));
    }
}
