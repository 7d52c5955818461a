//! Logging for the demo binary.
//!
//! The terminal belongs to the demo page while it runs, so events only go to
//! a log file. Without `--log-file` no subscriber is installed.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not set.
    pub level: Level,
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    /// - 0 (no `-v`): info level
    /// - 1 (`-v`): debug level
    /// - 2+ (`-vv`): trace level
    pub fn from_verbosity(verbosity: u8, log_file: Option<PathBuf>) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, log_file }
    }
}

pub fn init_logging(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .wrap_err("failed to install log subscriber")?;
    Ok(())
}
