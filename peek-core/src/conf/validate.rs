use crate::conf::ConfigError;
use crate::conf::types::{PeekConfig, StoreKind};
use crate::dashboard::ByteUnit;

/// Largest number of decimals a byte value may be printed with.
pub const MAX_PRECISION: usize = 6;

/// Check a parsed config. Every problem found is returned, not just the first.
pub fn validate_config(config: &PeekConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !config.log_file.is_file() {
        errors.push(ConfigError::MissingLogFile {
            path: config.log_file.clone(),
        });
    }

    if config.store.mode == StoreKind::Persistent && config.store.path.as_os_str().is_empty() {
        errors.push(ConfigError::MissingStorePath);
    }

    let dashboard = &config.dashboard;
    if dashboard.refresh_interval_secs == 0 {
        errors.push(ConfigError::InvalidRefreshInterval);
    }
    if dashboard.precision > MAX_PRECISION {
        errors.push(ConfigError::InvalidPrecision {
            precision: dashboard.precision,
            max: MAX_PRECISION,
        });
    }
    if let Err(reason) = dashboard.byte_unit.parse::<ByteUnit>() {
        errors.push(ConfigError::InvalidByteUnit { reason });
    }
    if dashboard.verb.trim().is_empty() {
        errors.push(ConfigError::EmptyVerb);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
