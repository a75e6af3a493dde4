//! Tracing setup for the binary.
//!
//! Logs go to stderr: stdout carries the input line, command output and the
//! workflow commands the runner parses.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. The runner sets `RUNNER_DEBUG=1` when step debug logging is on.
pub fn default_filter(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "debug",
        _ => "info",
    }
}

pub fn init_tracing() {
    let runner_debug = std::env::var("RUNNER_DEBUG").ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(runner_debug.as_deref())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
