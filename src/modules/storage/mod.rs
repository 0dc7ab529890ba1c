//! Durable key/value storage for the report and notification collections
//!
//! Mirrors a browser-style string store: every value is a whole serialized
//! collection written under a fixed key.

mod file_storage;
mod key_value;
mod memory_storage;

pub use file_storage::FileStorage;
pub use key_value::{KeyValueStorage, StorageError};
pub use memory_storage::MemoryStorage;
