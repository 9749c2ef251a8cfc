//! RPC method handler for the linkshelf JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! bookmark service and settings engine via the `App` struct.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::bookmark_service::BookmarkServiceTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::BookmarkInput;
use crate::types::page::page_numbers;
use crate::types::url_match::UrlMatchMode;

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

fn required<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    str_param(params, name).ok_or_else(|| format!("missing {}", name))
}

fn input_from(params: &Value) -> Result<BookmarkInput, String> {
    Ok(BookmarkInput {
        url: required(params, "url")?.to_string(),
        title: str_param(params, "title").map(str::to_string),
        description: str_param(params, "description").map(str::to_string),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Bookmarks ───
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let bms = a.bookmarks.list_bookmarks();
            serde_json::to_value(bms).map_err(|e| e.to_string())
        }
        "bookmark.page" => {
            let page = params.get("page").and_then(|v| v.as_u64()).unwrap_or(1) as usize;
            let a = app.lock().map_err(|e| e.to_string())?;
            let page = a.bookmarks.list_page(page);
            let markers = page_numbers(page.page, page.total_pages);
            Ok(json!({
                "items": page.items,
                "page": page.page,
                "total_pages": page.total_pages,
                "total_items": page.total_items,
                "markers": markers,
            }))
        }
        "bookmark.add" => {
            let input = input_from(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let bm = a.bookmarks.add_bookmark(input);
            serde_json::to_value(bm).map_err(|e| e.to_string())
        }
        "bookmark.update" => {
            let id = required(params, "id")?;
            let input = input_from(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.bookmarks.update_bookmark(id, input) {
                Some(bm) => serde_json::to_value(bm).map_err(|e| e.to_string()),
                None => Ok(Value::Null),
            }
        }
        "bookmark.delete" => {
            let id = required(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let deleted = a.bookmarks.delete_bookmark(id);
            Ok(json!({"deleted": deleted}))
        }
        "bookmark.exists" => {
            let url = required(params, "url")?;
            let mode = match str_param(params, "mode") {
                Some(m) => Some(m.parse::<UrlMatchMode>()?),
                None => None,
            };
            let a = app.lock().map_err(|e| e.to_string())?;
            let exists = match mode {
                Some(mode) => a.bookmarks.url_exists_with(url, mode),
                None => a.bookmarks.url_exists(url),
            };
            let highlight = a.bookmarks.highlighted_ids(url);
            Ok(json!({"exists": exists, "highlight": highlight}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            match str_param(params, "key") {
                Some(key) => a.settings_engine.get_value(key).map_err(|e| e.to_string()),
                None => serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string()),
            }
        }
        "settings.set" => {
            let key = required(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
