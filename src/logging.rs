//! Diagnostic tracing. Off unless `SESSION_FINDER_LOG` is set, so the
//! regular output stays exactly what the user asked for.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SESSION_FINDER_LOG";

/// Install a stderr subscriber filtered by `SESSION_FINDER_LOG`
/// (e.g. `SESSION_FINDER_LOG=debug`).
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Initialize logging for tests.
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV))
        .with_test_writer()
        .try_init();
}
