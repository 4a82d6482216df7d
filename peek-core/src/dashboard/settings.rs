use crate::dashboard::constants::DEFAULT_REFRESH_INTERVAL;
use crate::dashboard::format::ByteUnit;
use std::path::PathBuf;
use std::time::Duration;

/// What the dashboard shows and how often.
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Access log whose size is reported, and tailed in follow mode.
    pub log_file: PathBuf,
    pub refresh_interval: Duration,
    /// HTTP method counted on the "total requests" row.
    pub verb: String,
    pub byte_unit: ByteUnit,
    pub precision: usize,
    /// Trailing window for the recent unique IP row; `None` hides the row.
    pub recent_window: Option<Duration>,
}

impl DashboardSettings {
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            verb: "GET".to_string(),
            byte_unit: ByteUnit::Megabytes,
            precision: 1,
            recent_window: None,
        }
    }
}
