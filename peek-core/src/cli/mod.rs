pub mod conf;
pub mod dashboard;
pub mod ingest;
pub mod report;

#[cfg(test)]
mod tests;

use crate::conf::{ConfigError, PeekConfig, parse_config, validate_config};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Build the effective config for a command.
///
/// The config file is optional when `--log` is given. A `--log` override
/// replaces `log_file`, and `overrides` applies any other command line
/// flags; both happen before validation, so flags are held to the same
/// rules as the file.
///
/// Runs before logging is installed, so it emits no events.
pub fn resolve_config(
    path: &Path,
    log: Option<PathBuf>,
    overrides: impl FnOnce(&mut PeekConfig),
) -> Result<PeekConfig> {
    let mut config = if path.exists() {
        let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        parse_config(&src, path)?
    } else if let Some(log) = &log {
        PeekConfig::new(log)
    } else {
        bail!(
            "no config file at '{}'; pass --log or run `peek config init`",
            path.display()
        );
    };

    if let Some(log) = log {
        config.log_file = log;
    }
    overrides(&mut config);

    validate_config(&config)
        .map_err(|errors| ConfigError::Validation {
            path: path.to_path_buf(),
            errors,
        })
        .with_context(|| format!("invalid configuration {}", path.display()))?;

    Ok(config)
}
