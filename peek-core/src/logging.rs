use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Name prefix of the daily log files written while the dashboard owns the terminal.
pub const LOG_FILE_PREFIX: &str = "peek.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

pub fn default_log_format() -> LogFormat {
    if io::stdout().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging to stderr with environment-based filtering.
///
/// - `RUST_LOG` controls the level (defaults to "info")
/// - JSON output flattens event fields for cleaner log lines
pub fn init_logging(format: LogFormat) {
    let builder = fmt().with_env_filter(env_filter()).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}

/// Initialize logging into a daily rolling file under `directory`.
///
/// Used while the dashboard draws on the terminal. Keep the returned guard
/// alive until exit or buffered lines are lost.
pub fn init_file_logging(directory: &Path, format: LogFormat) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let builder = fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.init(),
    }

    Ok(guard)
}
