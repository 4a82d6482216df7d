mod fixtures;
pub mod tracing;

pub use fixtures::{AccessLog, fixture_path};
pub use tracing::{CapturedEvent, init_test_tracing};
