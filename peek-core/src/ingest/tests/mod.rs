use crate::ingest::{IngestError, IngestStats, LogTail, ingest_file};
use crate::store::LogStore;
use pretty_assertions::assert_eq;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

const LINE_A: &str = r#"10.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.1" 200 100 "-" "curl/8.0""#;
const LINE_B: &str = r#"10.0.0.2 - - [10/Oct/2000:13:55:37 -0700] "POST /login HTTP/1.1" 302 0 "-" "curl/8.0""#;
const LINE_C: &str = r#"10.0.0.3 - - [10/Oct/2000:13:55:38 -0700] "GET /a.css HTTP/1.1" 200 900 "-" "curl/8.0""#;

fn append(path: &Path, text: &str) {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.write_all(text.as_bytes()).unwrap();
}

#[test]
fn ingest_file_reads_every_line() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, format!("{LINE_A}\ngarbage\n\n{LINE_B}\n{LINE_C}")).unwrap();
    let store = LogStore::ephemeral().unwrap();

    // Act
    let stats = ingest_file(&path, &store).unwrap();

    // Assert
    assert_eq!(
        stats,
        IngestStats {
            inserted: 3,
            skipped: 1
        }
    );
    assert_eq!(store.count().unwrap(), 3);
    assert_eq!(store.total_byte_count().unwrap(), 1_000);
}

#[test]
fn tail_only_reads_appended_lines() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    append(&path, &format!("{LINE_A}\n"));
    let store = LogStore::ephemeral().unwrap();
    let mut tail = LogTail::new(&path);
    assert_eq!(tail.read_new(&store).unwrap().inserted, 1);

    // Act
    append(&path, &format!("{LINE_B}\n{LINE_C}\n"));
    let stats = tail.read_new(&store).unwrap();

    // Assert
    assert_eq!(stats.inserted, 2);
    assert_eq!(store.count().unwrap(), 3);
    assert_eq!(tail.read_new(&store).unwrap(), IngestStats::default());
}

#[test]
fn tail_leaves_partial_line_for_next_call() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    let (head, rest) = LINE_B.split_at(20);
    append(&path, &format!("{LINE_A}\n{head}"));
    let store = LogStore::ephemeral().unwrap();
    let mut tail = LogTail::new(&path);

    assert_eq!(tail.read_new(&store).unwrap().inserted, 1);
    assert_eq!(tail.offset(), LINE_A.len() as u64 + 1);

    append(&path, &format!("{rest}\n"));
    let stats = tail.read_new(&store).unwrap();

    assert_eq!(stats, IngestStats { inserted: 1, skipped: 0 });
    assert_eq!(store.all_records().unwrap()[1].verb, "POST");
}

#[test]
fn tail_restarts_after_truncation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    append(&path, &format!("{LINE_A}\n{LINE_B}\n"));
    let store = LogStore::ephemeral().unwrap();
    let mut tail = LogTail::new(&path);
    tail.read_new(&store).unwrap();

    fs::write(&path, format!("{LINE_C}\n")).unwrap();
    let stats = tail.read_new(&store).unwrap();

    assert_eq!(stats.inserted, 1);
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn at_end_skips_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    append(&path, &format!("{LINE_A}\n{LINE_B}\n"));
    let store = LogStore::ephemeral().unwrap();

    let mut tail = LogTail::at_end(&path).unwrap();
    assert_eq!(tail.read_new(&store).unwrap().inserted, 0);

    append(&path, &format!("{LINE_C}\n"));
    assert_eq!(tail.read_new(&store).unwrap().inserted, 1);
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn missing_log_is_a_read_error() {
    let dir = tempdir().unwrap();
    let store = LogStore::ephemeral().unwrap();

    let err = ingest_file(dir.path().join("nope.log"), &store).unwrap_err();

    assert!(matches!(err, IngestError::Read { .. }));
    assert!(matches!(
        LogTail::at_end(dir.path().join("nope.log")).unwrap_err(),
        IngestError::Read { .. }
    ));
}

#[test]
fn stats_accumulate() {
    let mut total = IngestStats::default();

    total += IngestStats { inserted: 2, skipped: 1 };
    total += IngestStats { inserted: 3, skipped: 0 };

    assert_eq!(total, IngestStats { inserted: 5, skipped: 1 });
}

#[test]
fn oversized_byte_count_is_skipped_not_fatal() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    let oversized = r#"10.0.0.9 - - [10/Oct/2000:13:55:39 -0700] "GET /big HTTP/1.1" 200 9223372036854775808 "-" "curl/8.0""#;
    fs::write(&path, format!("{oversized}\n{LINE_A}\n")).unwrap();
    let store = LogStore::ephemeral().unwrap();
    let mut tail = LogTail::new(&path);

    // Act
    let stats = tail.read_new(&store).unwrap();

    // Assert
    assert_eq!(
        stats,
        IngestStats {
            inserted: 1,
            skipped: 1
        }
    );
    assert_eq!(store.total_byte_count().unwrap(), 100);
}
