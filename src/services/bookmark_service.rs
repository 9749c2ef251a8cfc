//! Bookmark Service for linkshelf.
//!
//! The application-facing operations: list, add, update, delete and URL
//! lookup. This is the only caller of the bookmark store. It assigns ids and
//! creation timestamps, and applies newest-first ordering on every read path.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::types::bookmark::{AddOutcome, Bookmark, BookmarkInput};
use crate::types::page::{paginate, Page};
use crate::types::settings::DEFAULT_PAGE_SIZE;
use crate::types::url_match::UrlMatchMode;

/// Trait defining the operations the presentation layer may call.
pub trait BookmarkServiceTrait {
    fn list_bookmarks(&self) -> Vec<Bookmark>;
    fn list_page(&self, page: usize) -> Page<Bookmark>;
    fn add_bookmark(&mut self, input: BookmarkInput) -> Bookmark;
    fn update_bookmark(&mut self, id: &str, input: BookmarkInput) -> Option<Bookmark>;
    fn delete_bookmark(&mut self, id: &str) -> bool;
    fn clear_bookmarks(&mut self) -> bool;
    fn url_exists(&self, url: &str) -> bool;
    fn url_exists_with(&self, url: &str, mode: UrlMatchMode) -> bool;
    fn highlighted_ids(&self, url: &str) -> Vec<String>;
}

/// Sorts newest first by `createdAt`, treating a missing timestamp as 0.
///
/// The sort is stable, so records with equal timestamps keep their storage order.
pub fn sort_newest_first(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by_key(|b| std::cmp::Reverse(b.sort_key()));
}

/// Bookmark service over an injected store.
pub struct BookmarkService<S: BookmarkStoreTrait> {
    store: S,
    match_mode: UrlMatchMode,
    page_size: usize,
}

impl<S: BookmarkStoreTrait> BookmarkService<S> {
    /// Creates a service with case-insensitive lookups and 10 bookmarks per page.
    pub fn new(store: S) -> Self {
        Self {
            store,
            match_mode: UrlMatchMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the mode `url_exists` compares with.
    pub fn with_match_mode(mut self, mode: UrlMatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn match_mode(&self) -> UrlMatchMode {
        self.match_mode
    }

    pub fn set_match_mode(&mut self, mode: UrlMatchMode) {
        self.match_mode = mode;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl<S: BookmarkStoreTrait> BookmarkServiceTrait for BookmarkService<S> {
    fn list_bookmarks(&self) -> Vec<Bookmark> {
        let mut bookmarks = self.store.get_all();
        sort_newest_first(&mut bookmarks);
        bookmarks
    }

    /// Returns one page of the newest-first listing. Out-of-range pages are clamped.
    fn list_page(&self, page: usize) -> Page<Bookmark> {
        paginate(&self.list_bookmarks(), page, self.page_size)
    }

    /// Creates a bookmark with a fresh id and the current time.
    ///
    /// The constructed record is returned even when the store skipped it as a
    /// duplicate or failed to write it.
    fn add_bookmark(&mut self, input: BookmarkInput) -> Bookmark {
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            url: input.url,
            title: Some(input.title.unwrap_or_default()),
            description: Some(input.description.unwrap_or_default()),
            created_at: Some(Self::now_millis()),
        };

        match self.store.add(bookmark.clone()) {
            AddOutcome::Added => debug!(id = %bookmark.id, "Bookmark added"),
            AddOutcome::Duplicate => debug!(url = %bookmark.url, "Bookmark not stored, URL already saved"),
            AddOutcome::NotPersisted => warn!(id = %bookmark.id, "Bookmark could not be persisted"),
        }
        bookmark
    }

    /// Replaces `url`, and `title`/`description` when given, on the record with `id`.
    ///
    /// Returns `None` without touching storage when no such record exists.
    fn update_bookmark(&mut self, id: &str, input: BookmarkInput) -> Option<Bookmark> {
        let existing = self.store.get_all().into_iter().find(|b| b.id == id)?;

        let updated = Bookmark {
            id: existing.id,
            url: input.url,
            title: input.title.or(existing.title),
            description: input.description.or(existing.description),
            created_at: existing.created_at,
        };

        if !self.store.update(updated.clone()) {
            warn!(id, "Bookmark update could not be persisted");
        }
        Some(updated)
    }

    fn delete_bookmark(&mut self, id: &str) -> bool {
        self.store.delete(id)
    }

    /// Removes every bookmark. Returns `false` if the empty collection could not be written.
    fn clear_bookmarks(&mut self) -> bool {
        info!("Clearing all bookmarks");
        self.store.clear()
    }

    /// Checks the configured match mode against every saved URL.
    fn url_exists(&self, url: &str) -> bool {
        self.url_exists_with(url, self.match_mode)
    }

    fn url_exists_with(&self, url: &str, mode: UrlMatchMode) -> bool {
        self.store.get_all().iter().any(|b| mode.matches(&b.url, url))
    }

    /// Ids of bookmarks whose URL equals the submitted URL after it is trimmed
    /// and lower-cased, in listing order.
    fn highlighted_ids(&self, url: &str) -> Vec<String> {
        let submitted = url.trim().to_lowercase();
        if submitted.is_empty() {
            return Vec::new();
        }
        self.list_bookmarks()
            .into_iter()
            .filter(|b| b.url == submitted)
            .map(|b| b.id)
            .collect()
    }
}
