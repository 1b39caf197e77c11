//! Tracing subscriber setup.
//!
//! Filtering follows `RUST_LOG` (default `info`). Output goes to stdout, or
//! is appended to `LOG_FILE` when that file can be opened.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::warn;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::config::{LogConfig, LogFormat};

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// A log file that cannot be opened is not fatal: logging falls back to
/// stdout and the failure is reported as the first event.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let mut open_failure = None;
    let writer = match config.file.as_deref().map(|path| (path, open_log_file(path))) {
        Some((_, Ok(file))) => BoxMakeWriter::new(Mutex::new(file)),
        Some((path, Err(e))) => {
            open_failure = Some((path.display().to_string(), e));
            BoxMakeWriter::new(io::stdout)
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    if let Some((path, e)) = open_failure {
        warn!(action = "open_log_file", status = "failed", path = %path, error = %e, "Logging to stdout instead");
    }

    Ok(())
}
