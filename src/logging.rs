//! Logging setup using tracing.
//!
//! Log level comes from the config (`warn` by default, `debug` with
//! `--verbose`) and can be overridden with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=folio=trace folio --log-file /tmp/folio.log
//! ```

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file
    File(PathBuf),
    /// Write to stderr (headless commands)
    Stderr,
    /// Drop everything (terminal UI without a log file)
    Off,
}

impl LogSink {
    /// Picks the sink for a run: a configured file always wins, otherwise
    /// the terminal UI stays silent and headless commands use stderr.
    #[must_use]
    pub fn select(file: Option<&Path>, interactive: bool) -> Self {
        match file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Resolves the filter directive for the configured level.
#[must_use]
pub fn filter_directive(level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        level.to_string()
    }
}

/// Installs the global subscriber.
pub fn init(sink: &LogSink, directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    match sink {
        LogSink::Off => return Ok(()),
        LogSink::Stderr => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .context("Failed to install logger")?,
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true),
                )
                .try_init()
                .context("Failed to install logger")?;
        }
    }

    tracing::debug!("logging initialised ({directive})");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
