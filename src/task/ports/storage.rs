//! Flat key-value storage port backing the task store.

use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Named-record storage, holding one serialised value per key.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the record stored under `key`.
    ///
    /// Returns `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium cannot be read.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium cannot be written.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backing medium.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    /// I/O failure from the backing medium.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
