//! Key-value storage backends.
//!
//! The bookmark store persists its whole collection as one string value under
//! one key. Anything implementing [`KeyValueStore`] can back it: the SQLite
//! [`Database`](crate::database::Database) for durable storage, or
//! [`MemoryStore`] for tests and throwaway sessions.

pub mod memory;

pub use memory::MemoryStore;

use crate::types::errors::StorageError;

/// A string-keyed store of string values, modelled on browser local storage.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
