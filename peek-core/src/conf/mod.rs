mod error;
mod loader;
mod types;
mod validate;


pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config};
pub use types::{DashboardConfig, LoggingConfig, PeekConfig, StoreConfig, StoreKind};
pub use validate::{MAX_PRECISION, validate_config};
