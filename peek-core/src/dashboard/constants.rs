use std::time::Duration;

pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 24;

/// Column of the static labels.
pub const LABEL_X: u16 = 1;
/// Column of the dynamic values.
pub const VALUE_X: u16 = 26;
/// Values are padded to this width so a shorter value erases a longer one.
pub const VALUE_WIDTH: usize = (SCREEN_WIDTH - VALUE_X - 1) as usize;
/// Minimum width of the requests-per-second value.
pub const RATE_WIDTH: usize = 5;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_RECENT_WINDOW: Duration = Duration::from_secs(60);
pub const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(25);

pub const CHECKED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
