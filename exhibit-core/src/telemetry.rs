//! Tracing subscriber setup for embedding applications and tools.

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "exhibit_core=info,exhibit_config=info";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_directives`. Panics if a global subscriber is already set.
pub fn init_tracing(default_directives: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(fmt::layer())
        .init();
}

/// Like [`init_tracing`] but reports an existing subscriber as an error.
pub fn try_init_tracing(default_directives: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(fmt::layer())
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}
