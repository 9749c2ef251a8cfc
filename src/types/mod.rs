// linkshelf shared type definitions
// Each submodule defines types used across the crate.

pub mod bookmark;
pub mod errors;
pub mod page;
pub mod settings;
pub mod url_match;
