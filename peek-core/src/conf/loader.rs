use crate::conf::ConfigError;
use crate::conf::types::PeekConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "peek.hcl";

/// Read, parse and validate a config file.
///
/// IO and parse failures are returned as-is. Semantic problems are
/// collected and returned together as [`ConfigError::Validation`].
pub fn load_config(path: &Path) -> Result<PeekConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(&src, path)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    validate_config(&config).map_err(|errors| ConfigError::Validation {
        path: path.to_path_buf(),
        errors,
    })?;

    tracing::debug!(path = %path.display(), log_file = %config.log_file.display(), "config loaded");
    Ok(config)
}

/// Parse HCL source without validating it. `path` is only used for errors.
pub fn parse_config(src: &str, path: &Path) -> Result<PeekConfig, ConfigError> {
    hcl::from_str(src).map_err(|e| ConfigError::parse(path, e))
}
