//! Probe logging setup
//!
//! The publications and sales probes log everything twice: a console
//! layer for watching the run and a plain-text file layer appended to a
//! fixed local log file so runs can be diffed afterwards.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fixed log file shared by the logging probes.
pub const DEFAULT_LOG_FILE: &str = "mercadolibre_api.log";

/// Install a console + file subscriber. Fails if a global subscriber is
/// already set.
pub fn init_dual_logging<P: AsRef<Path>>(log_file: P) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file.as_ref())
        .with_context(|| format!("could not open log file {}", log_file.as_ref().display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}
