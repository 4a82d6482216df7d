//! Statistics store.
//!
//! An append-only SQLite table of [`Record`](crate::record::Record)s plus the fixed
//! set of aggregate queries the dashboard needs. Every query is recomputed from
//! scratch on each call.

mod error;
mod field;
mod log_store;
mod schema;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use field::RecordField;
pub use log_store::{LogStore, Occurrences, RecordId, StoreMode};

/// Maximum number of entries returned by an occurrence query.
pub const TOP_OCCURRENCES: usize = 5;

pub type Result<T> = std::result::Result<T, StoreError>;
