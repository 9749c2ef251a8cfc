// linkshelf state managers
// Managers own persisted state: the bookmark collection under its storage key.

pub mod bookmark_store;
