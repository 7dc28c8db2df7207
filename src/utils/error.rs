use std::path::PathBuf;
use thiserror::Error;

/// Domain errors raised below the command layer.
#[derive(Debug, Error, PartialEq)]
pub enum QsError {
    /// Malformed or inconsistent input (mismatched lengths, empty read set, bad shape).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An output directory or file could not be created.
    #[error("Failed to create {}: {msg}", path.display())]
    ResourceCreation { path: PathBuf, msg: String },
}

impl From<QsError> for String {
    fn from(err: QsError) -> Self {
        err.to_string()
    }
}

pub type QsResult<T> = std::result::Result<T, QsError>;
