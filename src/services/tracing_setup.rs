//! Tracing subscriber setup
//!
//! The TUI owns stdout, so all diagnostics go to a log file. This module
//! builds the subscriber shared by the binary and the tests.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber writing to `log_file_path`.
///
/// Filtering follows RUST_LOG with a DEBUG default. Returns `None` if the
/// log file could not be created or a global subscriber is already set.
pub fn init_global(log_file_path: &Path) -> Option<()> {
    let log_file = File::create(log_file_path).ok()?;
    build_subscriber(log_file).try_init().ok()
}

/// Build a subscriber that writes formatted events to `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
