use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The level is taken from the `LOGLEVEL` environment variable and defaults
/// to `info`. Safe to call more than once; only the first call installs the
/// subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = std::env::var("LOGLEVEL").unwrap_or_else(|_| String::from("info"));
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level))
            .with_target(false)
            .init();
    });
}
