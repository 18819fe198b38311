//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/vanguard-shell/logs/` because the
/// terminal itself is owned by the shell's renderer.
/// Log level is controlled by the `VANGUARD_LOG` environment variable.
///
/// # Examples
/// ```bash
/// VANGUARD_LOG=debug cargo run
/// VANGUARD_LOG=vanguard_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Creating log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "vanguard.log");

    let env_filter = EnvFilter::try_from_env("VANGUARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("vanguard=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::debug!("Logging to {}", log_dir.display());

    Ok(())
}

/// `<data_local_dir>/vanguard-shell/logs`, or `./vanguard-shell/logs`
/// when the platform has no data directory
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vanguard-shell")
        .join("logs")
}
