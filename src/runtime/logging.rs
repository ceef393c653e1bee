use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Initialise tracing from `RUST_LOG`, falling back to the configured filter.
pub fn init(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!("keeping existing subscriber: {e}");
    }
}
