//! Diagnostic logging to stderr.
//!
//! Filter precedence: `BIKESHARE_LOG`, then the configured `log_level`,
//! then `warn`. Report output never goes through here.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "BIKESHARE_LOG";

pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
