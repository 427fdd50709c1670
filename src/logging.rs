//! Diagnostics go through `tracing`, written to stderr so that stdout only
//! carries command output. The filter comes from `QUELIO_LOG` (default: warn).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QUELIO_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests calling run() twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
