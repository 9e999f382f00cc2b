//! Contact Registry - Main entry point
//!
//! Runs a single registry session: requests are read from stdin and
//! responses written to stdout, one JSON document per line.

use anyhow::Result;
use contact_registry::{run_session, Config, ContactRegistry};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for responses)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(environment = %config.environment, "Configuration loaded successfully");

    let mut registry = ContactRegistry::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let summary = match run_session(&mut registry, stdin.lock(), stdout.lock()) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Session failed: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Session complete: {} requests, {} contacts added, {} rejected",
        summary.requests, summary.contacts_added, summary.rejected
    );

    Ok(())
}
