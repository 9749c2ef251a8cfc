//! App Core for linkshelf.
//!
//! Wires settings, storage backend, bookmark store and bookmark service together.

use thiserror::Error;
use tracing::info;

use crate::database::Database;
use crate::managers::bookmark_store::BookmarkStore;
use crate::services::bookmark_service::BookmarkService;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::types::errors::{SettingsError, StorageError};

/// Key-value backend chosen at startup.
pub type Backend = Box<dyn KeyValueStore + Send>;

/// The bookmark service as wired by [`App`].
pub type AppBookmarkService = BookmarkService<BookmarkStore<Backend>>;

/// Errors that prevent the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Central application struct holding the settings engine and bookmark service.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmarks: AppBookmarkService,
}

impl App {
    /// Loads settings from `config_path` (or the platform default) and opens
    /// the configured SQLite database.
    pub fn open(config_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;

        let db_path = settings_engine.database_path();
        let db = Database::open(&db_path)?;
        info!(database = %db_path.display(), "Opened bookmark database");

        Ok(Self::with_backend(settings_engine, Box::new(db)))
    }

    /// Loads settings but keeps bookmarks in memory only.
    pub fn open_ephemeral(config_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        info!("Using in-memory bookmark storage");
        Ok(Self::with_backend(settings_engine, Box::new(MemoryStore::new())))
    }

    /// Builds the store and service over `backend` using the engine's current settings.
    pub fn with_backend(settings_engine: SettingsEngine, backend: Backend) -> Self {
        let settings = settings_engine.get_settings().clone();
        let store = BookmarkStore::with_key(backend, &settings.storage.storage_key)
            .with_duplicate_policy(settings.bookmarks.duplicate_policy);
        let bookmarks = BookmarkService::new(store)
            .with_match_mode(settings.bookmarks.url_match_mode)
            .with_page_size(settings.bookmarks.page_size);

        Self {
            settings_engine,
            bookmarks,
        }
    }

    /// Pushes the current bookmark settings into the running store and service.
    ///
    /// The storage key and database path only take effect on the next start.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings().bookmarks.clone();
        self.bookmarks
            .store_mut()
            .set_duplicate_policy(settings.duplicate_policy);
        self.bookmarks.set_match_mode(settings.url_match_mode);
        self.bookmarks.set_page_size(settings.page_size);
    }
}
