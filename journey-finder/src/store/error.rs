//! Train store error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when reading or writing the train store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a valid train list
    #[error("malformed train data in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// Train data failed validation
    #[error("invalid train data: {0}")]
    Invalid(#[from] DomainError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
