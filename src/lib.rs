//! linkshelf: a local bookmark manager.
//!
//! The whole bookmark collection lives under one key of a key-value store.
//! [`managers::bookmark_store`] owns that key; [`services::bookmark_service`]
//! is the operation set front ends call.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
