//! Nestaway
//!
//! Facade over the workspace crates plus process-level setup. Library
//! crates only emit `tracing` events; the host installs the subscriber
//! once through [`init_logging`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core;
pub use app_state;
pub use app_ui;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber
///
/// `default_filter` is used when `RUST_LOG` is unset, e.g.
/// `"app_state=debug,info"`.
///
/// # Errors
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")?;

    tracing::debug!("logging initialised");
    Ok(())
}
