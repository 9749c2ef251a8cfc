use thiserror::Error;

// === StorageError ===

/// Errors raised by key-value storage backends.
///
/// These never reach callers of the bookmark store; the store logs them and
/// falls back to an empty or no-op result.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing database rejected the operation.
    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// The stored value could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The backend cannot be used right now (quota, lock poisoning, read-only media).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
