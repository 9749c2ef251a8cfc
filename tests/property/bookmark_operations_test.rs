//! Property-based tests for bookmark store and service operations.
//!
//! These tests verify the persistence round-trip, the newest-first ordering
//! law, delete isolation, and the case-insensitive duplicate rule for
//! arbitrary URLs and timestamps.

use std::collections::HashSet;

use linkshelf::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use linkshelf::services::bookmark_service::{BookmarkService, BookmarkServiceTrait};
use linkshelf::storage::MemoryStore;
use linkshelf::types::bookmark::{Bookmark, BookmarkInput};
use proptest::prelude::*;

/// Strategy for generating valid URL strings with mixed-case hosts.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-zA-Z][a-zA-Z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for a stored record; ids are made unique by the caller.
fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (
        arb_url(),
        proptest::option::of("[a-zA-Z0-9 ]{0,20}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,40}"),
        proptest::option::of(0i64..2_000_000_000_000),
    )
        .prop_map(|(url, title, description, created_at)| Bookmark {
            id: String::new(),
            url,
            title,
            description,
            created_at,
        })
}

fn arb_collection() -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::vec(arb_bookmark(), 0..25).prop_map(|mut bms| {
        for (i, bm) in bms.iter_mut().enumerate() {
            bm.id = format!("id-{}", i);
        }
        bms
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    // Saving then loading yields the same records in the same storage order.
    #[test]
    fn save_then_get_all_round_trips(bms in arb_collection()) {
        let mut store = BookmarkStore::new(MemoryStore::new());
        prop_assert!(store.save(&bms));
        prop_assert_eq!(store.get_all(), bms);
    }

    // Listing is ordered by createdAt descending (missing = 0), and stable.
    #[test]
    fn list_is_newest_first_and_stable(bms in arb_collection()) {
        let mut store = BookmarkStore::new(MemoryStore::new());
        store.save(&bms);
        let service = BookmarkService::new(store);

        let listed = service.list_bookmarks();
        prop_assert_eq!(listed.len(), bms.len());

        for pair in listed.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.sort_key() >= b.sort_key());
            if a.sort_key() == b.sort_key() {
                let pos_a = bms.iter().position(|x| x.id == a.id).unwrap();
                let pos_b = bms.iter().position(|x| x.id == b.id).unwrap();
                prop_assert!(pos_a < pos_b, "ties must keep storage order");
            }
        }
    }

    // Deleting an existing id removes exactly that record and nothing else.
    #[test]
    fn delete_removes_exactly_one(bms in arb_collection().prop_filter("non-empty", |b| !b.is_empty()), pick in any::<prop::sample::Index>()) {
        let mut store = BookmarkStore::new(MemoryStore::new());
        store.save(&bms);
        let mut service = BookmarkService::new(store);

        let victim = pick.get(&bms).id.clone();
        prop_assert!(service.delete_bookmark(&victim));

        let remaining = service.store().get_all();
        let expected: Vec<Bookmark> = bms.iter().filter(|b| b.id != victim).cloned().collect();
        prop_assert_eq!(remaining, expected);
        prop_assert!(!service.delete_bookmark(&victim));
    }

    // With the default policy, case variants of one URL are stored once,
    // and every added id is distinct.
    #[test]
    fn case_variants_are_stored_once(urls in proptest::collection::vec(arb_url(), 1..15)) {
        let mut service = BookmarkService::new(BookmarkStore::new(MemoryStore::new()));

        let mut ids = HashSet::new();
        for url in &urls {
            let bm = service.add_bookmark(BookmarkInput::new(url.clone()));
            prop_assert!(ids.insert(bm.id));
            let bm = service.add_bookmark(BookmarkInput::new(url.to_uppercase()));
            prop_assert!(ids.insert(bm.id));
        }

        let distinct: HashSet<String> = urls.iter().map(|u| u.to_lowercase()).collect();
        let stored = service.list_bookmarks();
        prop_assert_eq!(stored.len(), distinct.len());
        for url in &urls {
            prop_assert!(service.url_exists(url));
        }
    }
}
