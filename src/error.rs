use thiserror::Error;

/// Failures of the durable key-value storage behind the wishlist and the
/// recently-viewed list. None of these ever reach a display caller; the
/// stores log them and carry on in memory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
