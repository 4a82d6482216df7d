use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path of a file under `integration-tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Scratch copy of an access log that tests can append to.
pub struct AccessLog {
    dir: TempDir,
    path: PathBuf,
}

impl AccessLog {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("access.log");
        fs::write(&path, "").expect("failed to create access log");
        Self { dir, path }
    }

    /// Copy a fixture into a fresh temp dir.
    pub fn from_fixture(name: &str) -> Self {
        let log = Self::empty();
        fs::copy(fixture_path(name), &log.path).expect("failed to copy fixture");
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scratch directory next to the log, for stores and configs.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn append(&self, lines: &[&str]) {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .expect("failed to open access log");
        for line in lines {
            writeln!(file, "{line}").expect("failed to append line");
        }
    }

    pub fn truncate(&self) {
        fs::write(&self.path, "").expect("failed to truncate access log");
    }
}
