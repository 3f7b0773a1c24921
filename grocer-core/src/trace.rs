//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtering is controlled by the `GROCER_LOG` environment variable
/// (standard `EnvFilter` syntax), defaulting to `info`. Calling this
/// more than once is harmless: later calls leave the existing
/// subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("GROCER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
