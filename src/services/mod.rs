// linkshelf services
// Services expose application operations: bookmark listing and lookup, and settings.

pub mod bookmark_service;
pub mod settings_engine;
