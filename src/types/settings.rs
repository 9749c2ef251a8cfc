use serde::{Deserialize, Serialize};

use super::url_match::{DuplicatePolicy, UrlMatchMode};

/// Storage key the bookmark collection lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "bookmarks";

/// Bookmarks shown per page in paginated listings.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Top-level application settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub bookmarks: BookmarkSettings,
}

/// Where and under which key the collection is persisted.
///
/// Missing fields take their defaults, so a file may set only what it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    pub storage_key: String,
    /// SQLite file path. `None` uses `linkshelf.db` in the platform data directory.
    pub database_path: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database_path: None,
        }
    }
}

/// Behavior of the bookmark operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookmarkSettings {
    pub duplicate_policy: DuplicatePolicy,
    /// Mode used by `url_exists` lookups.
    pub url_match_mode: UrlMatchMode,
    pub page_size: usize,
}

impl Default for BookmarkSettings {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            url_match_mode: UrlMatchMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppSettings {
    /// Checks constraints serde cannot express. Returns a description of the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.storage_key.trim().is_empty() {
            return Err("storage.storage_key must not be empty".to_string());
        }
        if self.bookmarks.page_size == 0 {
            return Err("bookmarks.page_size must be at least 1".to_string());
        }
        Ok(())
    }
}
