use crate::conf::ConfigError;
use crate::dashboard::{ByteUnit, DashboardSettings};
use crate::logging::LogFormat;
use crate::store::StoreMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeekConfig {
    /// Access log to ingest and watch.
    pub log_file: PathBuf,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PeekConfig {
    /// Defaults for everything but the access log.
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            store: StoreConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn store_mode(&self) -> StoreMode {
        match self.store.mode {
            StoreKind::Ephemeral => StoreMode::Ephemeral,
            StoreKind::Persistent => StoreMode::Persistent(self.store.path.clone()),
        }
    }

    pub fn dashboard_settings(&self) -> Result<DashboardSettings, ConfigError> {
        let dashboard = &self.dashboard;
        let byte_unit = dashboard
            .byte_unit
            .parse::<ByteUnit>()
            .map_err(|reason| ConfigError::InvalidByteUnit { reason })?;

        Ok(DashboardSettings {
            log_file: self.log_file.clone(),
            refresh_interval: Duration::from_secs(dashboard.refresh_interval_secs),
            verb: dashboard.verb.clone(),
            byte_unit,
            precision: dashboard.precision,
            recent_window: dashboard.recent_window_secs.map(Duration::from_secs),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Ephemeral,
    #[default]
    Persistent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub mode: StoreKind,

    /// Database file for the persistent store.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mode: StoreKind::default(),
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("peek.db")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// HTTP method counted on the "total requests" row.
    #[serde(default = "default_verb")]
    pub verb: String,

    /// One of `B`, `KB`, `MB`, `GB`.
    #[serde(default = "default_byte_unit")]
    pub byte_unit: String,

    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Enables the recent unique IP row.
    #[serde(default)]
    pub recent_window_secs: Option<u64>,

    /// Ingest lines appended to the access log while the dashboard runs.
    #[serde(default = "default_follow")]
    pub follow: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            verb: default_verb(),
            byte_unit: default_byte_unit(),
            precision: default_precision(),
            recent_window_secs: None,
            follow: default_follow(),
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    5
}

fn default_verb() -> String {
    "GET".to_string()
}

fn default_byte_unit() -> String {
    ByteUnit::Megabytes.symbol().to_string()
}

fn default_precision() -> usize {
    1
}

fn default_follow() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `json` or `pretty`; picked from the terminal when unset.
    #[serde(default)]
    pub format: Option<LogFormat>,

    /// Where the dashboard writes its log files.
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("logs")
}
