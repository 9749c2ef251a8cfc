//! Log output for the linkshelf binaries.
//!
//! Logs go to stderr so stdout stays free for command output and the RPC channel.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling it a second time is a no-op.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "linkshelf=debug" } else { "linkshelf=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
