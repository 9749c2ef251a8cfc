//! Unit tests for the BookmarkStore public API.
//!
//! These tests exercise the whole-collection persistence contract through
//! `BookmarkStoreTrait`, over the in-memory backend, the SQLite backend, and a
//! backend whose writes always fail.

use linkshelf::database::Database;
use linkshelf::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use linkshelf::storage::{KeyValueStore, MemoryStore};
use linkshelf::types::bookmark::{AddOutcome, Bookmark};
use linkshelf::types::errors::StorageError;
use linkshelf::types::url_match::{DuplicatePolicy, UrlMatchMode};
use rstest::rstest;

fn bookmark(id: &str, url: &str, created_at: Option<i64>) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        url: url.to_string(),
        title: Some(format!("Title {}", id)),
        description: None,
        created_at,
    }
}

/// Backend that can be read but refuses every write.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

/// Backend whose reads always fail.
struct BrokenReadStore;

impl KeyValueStore for BrokenReadStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn test_missing_key_reads_as_empty() {
    let store = BookmarkStore::new(MemoryStore::new());
    assert!(store.get_all().is_empty());
}

#[rstest]
#[case("{not json")]
#[case("42")]
#[case(r#"{"id":"1","url":"https://a.com"}"#)]
#[case(r#"[{"id":"1"}]"#)]
#[case("")]
fn test_corrupt_value_reads_as_empty(#[case] raw: &str) {
    let store = BookmarkStore::new(MemoryStore::with_value("bookmarks", raw));
    assert!(store.get_all().is_empty());
}

#[test]
fn test_read_failure_reads_as_empty() {
    let store = BookmarkStore::new(BrokenReadStore);
    assert!(store.get_all().is_empty());
}

#[test]
fn test_records_missing_optional_fields_load() {
    let raw = r#"[
        {"id":"1","url":"https://a.com"},
        {"id":"2","url":"https://b.com","title":"B","description":"","createdAt":1700000000000}
    ]"#;
    let store = BookmarkStore::new(MemoryStore::with_value("bookmarks", raw));
    let all = store.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, None);
    assert_eq!(all[0].created_at, None);
    assert_eq!(all[1].title.as_deref(), Some("B"));
    assert_eq!(all[1].created_at, Some(1_700_000_000_000));
}

#[test]
fn test_save_then_get_all_round_trips() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    let bms = vec![
        bookmark("1", "https://a.com", Some(100)),
        bookmark("2", "https://b.com", None),
        bookmark("3", "https://c.com", Some(300)),
    ];
    assert!(store.save(&bms));
    assert_eq!(store.get_all(), bms);
}

#[test]
fn test_get_all_keeps_storage_order() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    store.save(&[
        bookmark("old", "https://a.com", Some(100)),
        bookmark("new", "https://b.com", Some(300)),
    ]);
    let ids: Vec<String> = store.get_all().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["old", "new"]);
}

#[test]
fn test_add_rejects_case_insensitive_duplicate() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    assert_eq!(store.add(bookmark("1", "https://A.com", Some(1))), AddOutcome::Added);
    assert_eq!(store.add(bookmark("2", "https://a.com", Some(2))), AddOutcome::Duplicate);
    let all = store.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "1");
}

#[test]
fn test_add_with_exact_policy_allows_case_variants() {
    let mut store = BookmarkStore::new(MemoryStore::new()).with_duplicate_policy(
        DuplicatePolicy::Reject {
            match_mode: UrlMatchMode::Exact,
        },
    );
    assert_eq!(store.add(bookmark("1", "https://A.com", None)), AddOutcome::Added);
    assert_eq!(store.add(bookmark("2", "https://a.com", None)), AddOutcome::Added);
    assert_eq!(store.add(bookmark("3", "https://a.com", None)), AddOutcome::Duplicate);
    assert_eq!(store.get_all().len(), 2);
}

#[test]
fn test_add_with_substring_policy_rejects_containing_urls() {
    let mut store = BookmarkStore::new(MemoryStore::new()).with_duplicate_policy(
        DuplicatePolicy::Reject {
            match_mode: UrlMatchMode::Substring,
        },
    );
    store.add(bookmark("1", "https://aa.com", None));
    assert_eq!(store.add(bookmark("2", "a.com", None)), AddOutcome::Duplicate);
}

#[test]
fn test_add_with_allow_policy_keeps_duplicates() {
    let mut store =
        BookmarkStore::new(MemoryStore::new()).with_duplicate_policy(DuplicatePolicy::Allow);
    store.add(bookmark("1", "https://a.com", None));
    store.add(bookmark("2", "https://a.com", None));
    assert_eq!(store.get_all().len(), 2);
}

#[test]
fn test_update_replaces_matching_record_only() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    store.save(&[
        bookmark("1", "https://a.com", Some(1)),
        bookmark("2", "https://b.com", Some(2)),
    ]);

    let mut changed = bookmark("2", "https://changed.com", Some(2));
    changed.title = None;
    assert!(store.update(changed.clone()));

    let all = store.get_all();
    assert_eq!(all[0], bookmark("1", "https://a.com", Some(1)));
    assert_eq!(all[1], changed);
}

#[test]
fn test_update_missing_id_is_silent_noop() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    store.save(&[bookmark("1", "https://a.com", Some(1))]);
    let before = store.backend().raw("bookmarks").map(str::to_string);

    assert!(!store.update(bookmark("ghost", "https://x.com", None)));
    assert_eq!(store.backend().raw("bookmarks").map(str::to_string), before);
}

#[test]
fn test_delete_reports_whether_found() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    store.save(&[
        bookmark("1", "https://a.com", Some(1)),
        bookmark("2", "https://b.com", Some(2)),
        bookmark("3", "https://c.com", Some(3)),
    ]);

    assert!(!store.delete("nonexistent-id"));
    assert_eq!(store.get_all().len(), 3);

    assert!(store.delete("2"));
    let all = store.get_all();
    assert_eq!(
        all,
        vec![
            bookmark("1", "https://a.com", Some(1)),
            bookmark("3", "https://c.com", Some(3)),
        ]
    );
}

#[test]
fn test_clear_writes_empty_array() {
    let mut store = BookmarkStore::new(MemoryStore::new());
    store.add(bookmark("1", "https://a.com", None));
    assert!(store.clear());
    assert!(store.get_all().is_empty());
    assert_eq!(store.backend().raw("bookmarks"), Some("[]"));
}

#[test]
fn test_write_failures_are_swallowed() {
    let mut store = BookmarkStore::new(ReadOnlyStore::default());
    assert!(!store.save(&[bookmark("1", "https://a.com", None)]));
    assert_eq!(
        store.add(bookmark("1", "https://a.com", None)),
        AddOutcome::NotPersisted
    );
    assert!(!store.clear());
    assert!(store.get_all().is_empty());
}

#[test]
fn test_delete_reports_false_when_write_fails() {
    let mut inner = MemoryStore::new();
    inner
        .set("bookmarks", r#"[{"id":"1","url":"https://a.com"}]"#)
        .unwrap();
    let mut store = BookmarkStore::new(ReadOnlyStore { inner });

    assert_eq!(store.get_all().len(), 1);
    assert!(!store.delete("1"));
    assert_eq!(store.get_all().len(), 1);
}

#[test]
fn test_sqlite_backend_round_trip() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let mut store = BookmarkStore::new(db);

    store.add(bookmark("1", "https://rust-lang.org", Some(10)));
    store.add(bookmark("2", "https://crates.io", Some(20)));
    assert!(store.delete("1"));

    let all = store.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].url, "https://crates.io");
}

#[test]
fn test_sqlite_backend_tolerates_corrupt_value() {
    let mut db = Database::open_in_memory().unwrap();
    db.set("bookmarks", "not json at all").unwrap();
    let store = BookmarkStore::new(db);
    assert!(store.get_all().is_empty());
}
