//! Access log ingestion.
//!
//! A [`LogTail`] remembers how far into the access log it has read. Each call
//! parses the complete lines appended since the previous call and inserts them
//! into a [`LogStore`](crate::store::LogStore). The `ingest` command uses a
//! single pass from the start of the file; the dashboard's follow mode calls
//! it once per refresh tick.

mod error;
mod tail;

#[cfg(test)]
mod tests;

pub use error::IngestError;
pub use tail::{IngestStats, LogTail, ingest_file};
