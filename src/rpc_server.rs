//! linkshelf RPC server: JSON-RPC over stdin/stdout for front-end integration.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! The `App` sits behind a `Mutex`, so requests are handled strictly one at a time.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use anyhow::Context;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use linkshelf::app::App;
use linkshelf::logging;
use linkshelf::rpc_handler::handle_method;

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    logging::init(std::env::var_os("LINKSHELF_VERBOSE").is_some());

    let config_path = std::env::var("LINKSHELF_CONFIG").ok();
    let app = Mutex::new(App::open(config_path).context("Failed to initialize linkshelf")?);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    respond(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;
    info!("RPC server ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin closed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!(method, "Handling request");

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(&mut out, &response)?;
    }

    info!("RPC server shutting down");
    Ok(())
}
