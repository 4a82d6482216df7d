//! `logs` table definition.

use rusqlite::Connection;

/// Create the `logs` table if it doesn't exist. The schema is fixed; there are no migrations.
pub fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)
}

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS logs (
    id        INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    ip        TEXT    NOT NULL,
    timestamp TEXT    NOT NULL,
    verb      TEXT    NOT NULL,
    path      TEXT    NOT NULL,
    status    INTEGER NOT NULL,
    size      INTEGER NOT NULL,
    referrer  TEXT    NOT NULL,
    useragent TEXT    NOT NULL
);
";

pub(crate) const INSERT_SQL: &str = "
INSERT INTO logs (ip, timestamp, verb, path, status, size, referrer, useragent)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

pub(crate) const SELECT_ALL_SQL: &str = "
SELECT ip, timestamp, verb, path, status, size, referrer, useragent
FROM logs
ORDER BY id
";

pub(crate) const COUNT_SQL: &str = "SELECT COUNT(*) FROM logs";

pub(crate) const SIZE_SQL: &str = "SELECT size FROM logs";

pub(crate) const DISTINCT_IP_SQL: &str = "SELECT COUNT(DISTINCT ip) FROM logs";

pub(crate) const IP_TIMESTAMP_SQL: &str = "SELECT ip, timestamp FROM logs";
