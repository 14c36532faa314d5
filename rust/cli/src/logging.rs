//! Diagnostic logging for the binary.
//!
//! Logs go to stderr so that stdout stays parseable (`cfg`, `classify --json`).

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,videopoker_engine=info";

/// Initialize logging for the application. Safe to call more than once; only
/// the first call installs a subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // already installed: keep the existing subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
}
