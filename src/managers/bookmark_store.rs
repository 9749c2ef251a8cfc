//! Bookmark Store for linkshelf.
//!
//! Implements `BookmarkStoreTrait`: the whole bookmark collection is kept as
//! one JSON array under a single key of a [`KeyValueStore`]. Every mutator is
//! a read-modify-write of the full collection.
//!
//! Storage failures never escape this module. They are logged and the
//! operation returns its empty or no-op default.

use tracing::{debug, error, warn};

use crate::storage::KeyValueStore;
use crate::types::bookmark::{AddOutcome, Bookmark};
use crate::types::errors::StorageError;
use crate::types::settings::DEFAULT_STORAGE_KEY;
use crate::types::url_match::DuplicatePolicy;

/// Trait defining bookmark persistence operations.
///
/// Records come back in storage order; callers that present bookmarks sort them.
pub trait BookmarkStoreTrait {
    fn get_all(&self) -> Vec<Bookmark>;
    fn save(&mut self, bookmarks: &[Bookmark]) -> bool;
    fn add(&mut self, bookmark: Bookmark) -> AddOutcome;
    fn update(&mut self, bookmark: Bookmark) -> bool;
    fn delete(&mut self, id: &str) -> bool;
    fn clear(&mut self) -> bool;
}

/// Bookmark store over a key-value backend.
pub struct BookmarkStore<K: KeyValueStore> {
    backend: K,
    key: String,
    duplicate_policy: DuplicatePolicy,
}

impl<K: KeyValueStore> BookmarkStore<K> {
    /// Creates a store using the default `"bookmarks"` key and the default duplicate policy.
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Creates a store that keeps its collection under `key`.
    pub fn with_key(backend: K, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Sets the rule `add` uses to detect an already-saved URL.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicatePolicy) {
        self.duplicate_policy = policy;
    }

    /// Returns the key-value backend.
    pub fn backend(&self) -> &K {
        &self.backend
    }

    fn load(&self) -> Result<Vec<Bookmark>, StorageError> {
        match self.backend.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    fn store_all(&mut self, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
        let json = serde_json::to_string(bookmarks)?;
        self.backend.set(&self.key, &json)
    }

    fn write(&mut self, bookmarks: &[Bookmark]) -> bool {
        match self.store_all(bookmarks) {
            Ok(()) => true,
            Err(e) => {
                error!(key = %self.key, "Error saving bookmarks: {}", e);
                false
            }
        }
    }
}

impl<K: KeyValueStore> BookmarkStoreTrait for BookmarkStore<K> {
    /// Loads the collection. An absent key, a read failure, or malformed data
    /// all yield an empty list.
    fn get_all(&self) -> Vec<Bookmark> {
        self.load().unwrap_or_else(|e| {
            error!(key = %self.key, "Error loading bookmarks: {}", e);
            Vec::new()
        })
    }

    /// Replaces the stored collection with `bookmarks`.
    fn save(&mut self, bookmarks: &[Bookmark]) -> bool {
        self.write(bookmarks)
    }

    /// Appends `bookmark` unless the duplicate policy finds a matching URL.
    ///
    /// When the stored value cannot be read the collection is treated as
    /// empty, so the new record replaces the unreadable data.
    fn add(&mut self, bookmark: Bookmark) -> AddOutcome {
        let mut bookmarks = self.get_all();

        if let Some(mode) = self.duplicate_policy.match_mode() {
            if let Some(existing) = bookmarks.iter().find(|b| mode.matches(&b.url, &bookmark.url)) {
                warn!(
                    url = %bookmark.url,
                    existing_id = %existing.id,
                    "Bookmark already exists, skipping add"
                );
                return AddOutcome::Duplicate;
            }
        }

        debug!(id = %bookmark.id, url = %bookmark.url, "Adding bookmark");
        bookmarks.push(bookmark);
        if self.write(&bookmarks) {
            AddOutcome::Added
        } else {
            AddOutcome::NotPersisted
        }
    }

    /// Replaces the record with the same `id`. Returns `false` if there is none
    /// or the write failed.
    fn update(&mut self, bookmark: Bookmark) -> bool {
        let mut bookmarks = self.get_all();
        let Some(slot) = bookmarks.iter_mut().find(|b| b.id == bookmark.id) else {
            debug!(id = %bookmark.id, "Update skipped, bookmark not found");
            return false;
        };
        *slot = bookmark;
        self.write(&bookmarks)
    }

    /// Removes the record with `id`. Returns `true` only if it existed and the
    /// shortened collection was written.
    fn delete(&mut self, id: &str) -> bool {
        let bookmarks = self.get_all();
        let remaining: Vec<Bookmark> = bookmarks.iter().filter(|b| b.id != id).cloned().collect();

        if remaining.len() == bookmarks.len() {
            debug!(id, "Delete skipped, bookmark not found");
            return false;
        }
        self.write(&remaining)
    }

    /// Writes an empty collection.
    fn clear(&mut self) -> bool {
        self.write(&[])
    }
}
