//! linkshelf database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! SQLite-backed [`KeyValueStore`](crate::storage::KeyValueStore).
//!
//! # Usage
//!
//! ```no_run
//! use linkshelf::database::Database;
//! use linkshelf::storage::KeyValueStore;
//!
//! // Open a persistent database
//! let mut db = Database::open("linkshelf.db").expect("failed to open database");
//! db.set("bookmarks", "[]").expect("write failed");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
