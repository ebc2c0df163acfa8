// src/logging.rs
// =============================================================================
// Diagnostic logging for people debugging a run.
//
// stdout belongs to the operator (status lines, summary), so diagnostics go to
// stderr. The default level is `warn`; set RUST_LOG for more, e.g.
//   RUST_LOG=site_pulse=debug site-pulse sites.csv
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");
    Ok(())
}
