use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering.
///
/// Events go to stderr so that reports written to stdout can be piped. When
/// stderr is a terminal the compact human formatter is used, otherwise JSON
/// with flattened event fields.
pub fn init_logging() {
    if io::stderr().is_terminal() {
        init_terminal_logging();
    } else {
        init_json_logging();
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_terminal_logging() {
    fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn init_json_logging() {
    fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}
