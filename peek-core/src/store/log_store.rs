use crate::record::Record;
use crate::store::field::RecordField;
use crate::store::schema::{
    COUNT_SQL, DISTINCT_IP_SQL, INSERT_SQL, IP_TIMESTAMP_SQL, SELECT_ALL_SQL, SIZE_SQL,
    init_schema,
};
use crate::store::{Result, StoreError, TOP_OCCURRENCES};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rusqlite::{Connection, params};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Log-native timestamp layout, e.g. `10/Oct/2000:13:55:36 -0700`.
const LOG_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Distinct values of one field mapped to their counts, most frequent first.
pub type Occurrences = IndexMap<String, u64>;

/// Store-generated row id. Strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(pub i64);

/// Lifecycle of the backing table, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StoreMode {
    /// In-memory table, discarded when the store is dropped.
    Ephemeral,
    /// On-disk table that survives restarts.
    Persistent(PathBuf),
}

/// Append-only table of access log records.
///
/// The connection is owned exclusively by this instance. Every insert runs in
/// its own autocommit transaction, so a persistent store never holds a partial
/// write.
#[derive(Debug)]
pub struct LogStore {
    conn: Connection,
    mode: StoreMode,
}

impl LogStore {
    pub fn open(mode: StoreMode) -> Result<Self> {
        let conn = match &mode {
            StoreMode::Ephemeral => Connection::open_in_memory()
                .map_err(|e| StoreError::unavailable(":memory:", e))?,
            StoreMode::Persistent(path) => {
                Connection::open(path).map_err(|e| StoreError::unavailable(path, e))?
            }
        };

        init_schema(&conn).map_err(|e| StoreError::unavailable(mode.label(), e))?;

        tracing::debug!(store = %mode.label().display(), "log store opened");

        Ok(Self { conn, mode })
    }

    pub fn ephemeral() -> Result<Self> {
        Self::open(StoreMode::Ephemeral)
    }

    pub fn persistent(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(StoreMode::Persistent(path.into()))
    }

    pub fn mode(&self) -> &StoreMode {
        &self.mode
    }

    /// Backing file, `None` for an ephemeral store.
    pub fn path(&self) -> Option<&Path> {
        match &self.mode {
            StoreMode::Ephemeral => None,
            StoreMode::Persistent(path) => Some(path),
        }
    }

    /// Append one record. `None` is accepted and ignored.
    pub fn insert(&self, record: Option<&Record>) -> Result<Option<RecordId>> {
        let Some(record) = record else {
            return Ok(None);
        };

        self.conn.execute(
            INSERT_SQL,
            params![
                record.ip_address,
                record.timestamp,
                record.verb,
                record.path,
                record.status,
                record.byte_count,
                record.referrer,
                record.user_agent,
            ],
        )?;

        Ok(Some(RecordId(self.conn.last_insert_rowid())))
    }

    pub fn count(&self) -> Result<u64> {
        Ok(self.conn.query_row(COUNT_SQL, [], |row| row.get(0))?)
    }

    /// Every stored record in insertion order.
    pub fn all_records(&self) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SQL)?;

        let rows = stmt.query_map([], |row| {
            Ok(Record {
                ip_address: row.get(0)?,
                timestamp: row.get(1)?,
                verb: row.get(2)?,
                path: row.get(3)?,
                status: row.get(4)?,
                byte_count: row.get(5)?,
                referrer: row.get(6)?,
                user_agent: row.get(7)?,
            })
        })?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// The [`TOP_OCCURRENCES`] most frequent values of `field` with their counts.
    pub fn occurrences_by_field(&self, field: RecordField) -> Result<Occurrences> {
        let mut stmt = self.conn.prepare_cached(field.occurrence_query())?;

        let rows = stmt.query_map([TOP_OCCURRENCES as i64], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
        })?;

        let mut occurrences = Occurrences::new();
        for row in rows {
            let (value, count) = row?;
            occurrences.insert(value, count);
        }
        Ok(occurrences)
    }

    /// Like [`occurrences_by_field`](Self::occurrences_by_field), resolving the field by name.
    pub fn occurrences_by_field_name(&self, name: &str) -> Result<Occurrences> {
        let field: RecordField = name.parse()?;
        self.occurrences_by_field(field)
    }

    /// Number of records whose `field` equals `value`.
    pub fn count_matching(&self, field: RecordField, value: &str) -> Result<u64> {
        let mut stmt = self.conn.prepare_cached(field.count_query())?;

        let count = if field.is_integer() {
            // A non-numeric filter on an integer column can never match.
            let Ok(value) = value.parse::<i64>() else {
                return Ok(0);
            };
            stmt.query_row([value], |row| row.get(0))?
        } else {
            stmt.query_row([value], |row| row.get(0))?
        };

        Ok(count)
    }

    /// Sum of every record's byte count, saturating at `u64::MAX`.
    ///
    /// Summed here because SQLite's `SUM` fails on signed overflow.
    pub fn total_byte_count(&self) -> Result<u64> {
        let mut stmt = self.conn.prepare_cached(SIZE_SQL)?;
        let mut rows = stmt.query([])?;

        let mut total = 0u64;
        while let Some(row) = rows.next()? {
            total = total.saturating_add(row.get::<_, u64>(0)?);
        }

        Ok(total)
    }

    pub fn distinct_ip_count(&self) -> Result<u64> {
        Ok(self.conn.query_row(DISTINCT_IP_SQL, [], |row| row.get(0))?)
    }

    /// Distinct IPs among records whose timestamp lies in `[start, end]`.
    ///
    /// Timestamps are stored in the log's own format, so the filter runs here
    /// rather than in SQL. Rows with unparseable timestamps are skipped.
    pub fn distinct_ip_count_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64> {
        let mut stmt = self.conn.prepare_cached(IP_TIMESTAMP_SQL)?;
        let mut rows = stmt.query([])?;

        let mut ips = HashSet::new();
        while let Some(row) = rows.next()? {
            let timestamp: String = row.get(1)?;
            let Ok(at) = DateTime::parse_from_str(&timestamp, LOG_TIMESTAMP_FORMAT) else {
                continue;
            };
            let at = at.with_timezone(&Utc);
            if at >= start && at <= end {
                ips.insert(row.get::<_, String>(0)?);
            }
        }

        Ok(ips.len() as u64)
    }

    /// Size of the backing file in bytes; always 0 for an ephemeral store.
    pub fn size_on_disk(&self) -> Result<u64> {
        match &self.mode {
            StoreMode::Ephemeral => Ok(0),
            StoreMode::Persistent(path) => fs::metadata(path)
                .map(|m| m.len())
                .map_err(|source| StoreError::FileSize {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

impl StoreMode {
    fn label(&self) -> PathBuf {
        match self {
            StoreMode::Ephemeral => PathBuf::from(":memory:"),
            StoreMode::Persistent(path) => path.clone(),
        }
    }
}
