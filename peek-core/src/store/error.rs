use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown record field '{name}'")]
    InvalidField { name: String },

    #[error("failed to open log store at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to read size of log store {path}: {source}")]
    FileSize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log store query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn invalid_field(name: impl Into<String>) -> Self {
        Self::InvalidField { name: name.into() }
    }

    pub fn unavailable(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}
