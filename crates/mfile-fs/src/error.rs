//! Error types for mfile-fs

use std::path::PathBuf;

/// Result type for mfile-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or persisting file content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error(transparent)]
    Content(#[from] mfile_content::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
