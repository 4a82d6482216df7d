//! Access log records.
//!
//! A [`Record`] is one parsed line of an nginx "combined" access log. Records are
//! produced by [`parse_line`], stored once by the [`LogStore`](crate::store::LogStore)
//! and never mutated afterwards.

mod parse;
mod types;


pub use parse::parse_line;
pub use types::Record;
