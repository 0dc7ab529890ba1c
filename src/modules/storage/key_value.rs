use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// String-valued durable storage addressed by fixed keys
///
/// Writes replace the whole value. Implementations must make a completed
/// `set` visible to every later `get`.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
