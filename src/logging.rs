use crate::config::{Paths, Settings};
use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "launcher.log";

/// Install a daily rolling file logger. Standard streams belong to the child,
/// so nothing is ever logged there.
///
/// Returns `None` when file logging is disabled in `settings`. The guard must
/// outlive every log call; dropping it flushes pending lines.
pub fn init(settings: &Settings, paths: &Paths) -> Result<Option<WorkerGuard>> {
    if !settings.file_logging {
        return Ok(None);
    }
    fs::create_dir_all(&paths.log_dir).context("create log dir")?;
    let file_appender = tracing_appender::rolling::daily(&paths.log_dir, LOG_FILE);
    let (nb, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(nb)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;
    Ok(Some(guard))
}

/// `RUST_LOG` when set and valid, else the configured filter, else `info`.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
