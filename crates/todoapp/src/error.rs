use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The slot could not be written (quota exceeded, read-only medium, ...).
    #[error("Storage error: {0}")]
    Storage(String),

    /// The slot holds bytes that are not a stored document (not UTF-8).
    #[error("Corrupt slot: {0}")]
    Corrupt(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
