use crate::ingest::IngestError;
use crate::record::parse_line;
use crate::store::LogStore;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub inserted: u64,
    pub skipped: u64,
}

impl AddAssign for IngestStats {
    fn add_assign(&mut self, rhs: Self) {
        self.inserted += rhs.inserted;
        self.skipped += rhs.skipped;
    }
}

/// Read position in an access log.
#[derive(Debug, Clone)]
pub struct LogTail {
    path: PathBuf,
    offset: u64,
}

impl LogTail {
    /// Start at the beginning of the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
        }
    }

    /// Start at the current end of the file, skipping everything already in it.
    pub fn at_end(path: impl Into<PathBuf>) -> Result<Self, IngestError> {
        let path = path.into();
        let offset = fs::metadata(&path)
            .map_err(|e| IngestError::read(&path, e))?
            .len();
        Ok(Self { path, offset })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Ingest the complete lines appended since the last call.
    ///
    /// A trailing line without a newline is still being written; it is left in
    /// place and picked up by a later call.
    pub fn read_new(&mut self, store: &LogStore) -> Result<IngestStats, IngestError> {
        self.read(store, false)
    }

    fn read(&mut self, store: &LogStore, include_partial: bool) -> Result<IngestStats, IngestError> {
        let mut file = File::open(&self.path).map_err(|e| IngestError::read(&self.path, e))?;
        let len = file
            .metadata()
            .map_err(|e| IngestError::read(&self.path, e))?
            .len();

        if len < self.offset {
            tracing::warn!(
                path = %self.path.display(),
                offset = self.offset,
                len,
                "access log shrank, reading from the start"
            );
            self.offset = 0;
        }

        let mut stats = IngestStats::default();
        if len == self.offset {
            return Ok(stats);
        }

        file.seek(SeekFrom::Start(self.offset))
            .map_err(|e| IngestError::read(&self.path, e))?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| IngestError::read(&self.path, e))?;
            if n == 0 {
                break;
            }
            if buf.last() != Some(&b'\n') && !include_partial {
                break;
            }
            self.offset += n as u64;

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            match store.insert(parse_line(&line).as_ref())? {
                Some(_) => stats.inserted += 1,
                None => {
                    tracing::debug!(line = %line.trim_end(), "skipping malformed access log line");
                    stats.skipped += 1;
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            inserted = stats.inserted,
            skipped = stats.skipped,
            offset = self.offset,
            "access log ingested"
        );

        Ok(stats)
    }
}

/// Ingest a whole access log in one pass, including a final unterminated line.
pub fn ingest_file(path: impl Into<PathBuf>, store: &LogStore) -> Result<IngestStats, IngestError> {
    LogTail::new(path).read(store, true)
}
