use layered_eurlex_batch::{logging, run_batch, BatchConfig, BatchError};
use std::path::PathBuf;

/// `eurlex-batch [config.toml]`
fn main() -> Result<(), BatchError> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => BatchConfig::load(&PathBuf::from(path))?,
        None => {
            let mut config = BatchConfig::default();
            config.apply_env_overrides();
            config
        }
    };
    logging::init(&config.log_filter)?;

    let summary = run_batch(&config)?;
    eprintln!(
        "labelled {} records into {} rows ({} sentences skipped)",
        summary.records,
        summary.rows,
        summary.skipped()
    );
    Ok(())
}
