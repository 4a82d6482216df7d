use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A groupable column of the `logs` table.
///
/// Each variant owns its SQL. Caller-supplied text never reaches a query
/// string; unknown names are rejected by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Ip,
    Timestamp,
    Verb,
    Path,
    Status,
    Size,
    Referrer,
    UserAgent,
}

macro_rules! occurrence_query {
    ($column:literal) => {
        concat!(
            "SELECT CAST(",
            $column,
            " AS TEXT), COUNT(*) AS n FROM logs GROUP BY ",
            $column,
            " ORDER BY n DESC, MIN(id) ASC LIMIT ?1"
        )
    };
}

macro_rules! count_query {
    ($column:literal) => {
        concat!("SELECT COUNT(*) FROM logs WHERE ", $column, " = ?1")
    };
}

impl RecordField {
    pub const ALL: [RecordField; 8] = [
        RecordField::Ip,
        RecordField::Timestamp,
        RecordField::Verb,
        RecordField::Path,
        RecordField::Status,
        RecordField::Size,
        RecordField::Referrer,
        RecordField::UserAgent,
    ];

    /// Column name in the `logs` table.
    pub fn column(self) -> &'static str {
        match self {
            RecordField::Ip => "ip",
            RecordField::Timestamp => "timestamp",
            RecordField::Verb => "verb",
            RecordField::Path => "path",
            RecordField::Status => "status",
            RecordField::Size => "size",
            RecordField::Referrer => "referrer",
            RecordField::UserAgent => "useragent",
        }
    }

    /// Top-N occurrence query, most frequent first, ties by first appearance.
    pub(crate) fn occurrence_query(self) -> &'static str {
        match self {
            RecordField::Ip => occurrence_query!("ip"),
            RecordField::Timestamp => occurrence_query!("timestamp"),
            RecordField::Verb => occurrence_query!("verb"),
            RecordField::Path => occurrence_query!("path"),
            RecordField::Status => occurrence_query!("status"),
            RecordField::Size => occurrence_query!("size"),
            RecordField::Referrer => occurrence_query!("referrer"),
            RecordField::UserAgent => occurrence_query!("useragent"),
        }
    }

    pub(crate) fn count_query(self) -> &'static str {
        match self {
            RecordField::Ip => count_query!("ip"),
            RecordField::Timestamp => count_query!("timestamp"),
            RecordField::Verb => count_query!("verb"),
            RecordField::Path => count_query!("path"),
            RecordField::Status => count_query!("status"),
            RecordField::Size => count_query!("size"),
            RecordField::Referrer => count_query!("referrer"),
            RecordField::UserAgent => count_query!("useragent"),
        }
    }

    /// Integer columns compare numerically, so their filter values are bound as integers.
    pub(crate) fn is_integer(self) -> bool {
        matches!(self, RecordField::Status | RecordField::Size)
    }
}

impl FromStr for RecordField {
    type Err = StoreError;

    /// Accepts both the column names and the record attribute names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" | "ip_address" => Ok(RecordField::Ip),
            "timestamp" => Ok(RecordField::Timestamp),
            "verb" => Ok(RecordField::Verb),
            "path" => Ok(RecordField::Path),
            "status" => Ok(RecordField::Status),
            "size" | "byte_count" => Ok(RecordField::Size),
            "referrer" => Ok(RecordField::Referrer),
            "useragent" | "user_agent" => Ok(RecordField::UserAgent),
            other => Err(StoreError::invalid_field(other)),
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
