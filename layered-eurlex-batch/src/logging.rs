use crate::errors::{BatchError, BatchResult};
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Fails if a subscriber is
/// already installed.
pub fn init(default_filter: &str) -> BatchResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BatchError::Logging(e.to_string()))
}
