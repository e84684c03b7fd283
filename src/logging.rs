//! `tracing` setup.
//!
//! The terminal belongs to the game, so log lines go to a file and only when
//! a log path is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Install the global subscriber. Returns false when logging is disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter: {}", config.log_filter))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("install tracing subscriber")?;
    Ok(true)
}
