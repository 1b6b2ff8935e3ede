use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort writing the import file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("permission denied writing {path}")]
    PermissionDenied { path: PathBuf },

    #[error("output directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl OutputError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::NotFound => Self::MissingDirectory {
                path: path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| path.to_path_buf()),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
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
            csv::ErrorKind::Io(io_err) => Self::io(path, io_err),
            kind => Self::Io {
                path: path.to_path_buf(),
                source: io::Error::other(format!("{kind:?}")),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
