use super::{LOG_LINE, record, write_log};
use crate::dashboard::{
    Dashboard, DashboardError, DashboardSettings, DashboardState, HeadlessSurface, Key,
    StopReason, Surface,
};
use crate::ingest::LogTail;
use crate::rate::ManualClock;
use crate::store::LogStore;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::tempdir;

fn settings(log: &Path) -> DashboardSettings {
    let mut settings = DashboardSettings::new(log);
    settings.refresh_interval = Duration::ZERO;
    settings
}

fn clock() -> ManualClock {
    ManualClock::new(UNIX_EPOCH + Duration::from_secs(1_700_000_000))
}

#[test]
fn stops_on_q_after_first_tick() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 2);
    let store = LogStore::ephemeral().unwrap();
    store.insert(Some(&record("10.0.0.1", "GET", 1_500_000))).unwrap();
    let mut dashboard = Dashboard::with_clock(store, settings(&log), clock());
    let mut surface = HeadlessSurface::default().with_keys([Some(Key::Char('q'))]);
    assert_eq!(dashboard.state(), DashboardState::Idle);

    // Act
    let reason = dashboard.run(&mut surface).unwrap();

    // Assert
    assert_eq!(reason, StopReason::KeyPressed);
    assert_eq!(dashboard.state(), DashboardState::Stopped);
    assert_eq!(dashboard.ticks(), 1);
    assert!(surface.row(1).starts_with("|Nginx Statistics"));
    assert!(surface.row(3).contains("Total GET requests:"));
    assert_eq!(&surface.row(2)[26..30], "0.0 ");
    assert!(surface.row(3)[26..].starts_with('1'));
    assert!(surface.row(6)[26..].starts_with("1.5 Megabytes"));
}

#[test]
fn keeps_ticking_until_a_stop_key() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 1);
    let mut dashboard =
        Dashboard::with_clock(LogStore::ephemeral().unwrap(), settings(&log), clock());
    let mut surface = HeadlessSurface::default().with_keys([
        None,
        Some(Key::Char('x')),
        None,
        Some(Key::Esc),
    ]);

    let reason = dashboard.run(&mut surface).unwrap();

    assert_eq!(reason, StopReason::KeyPressed);
    assert_eq!(dashboard.ticks(), 4);
    // one refresh for the static layout plus one per tick
    assert_eq!(surface.refresh_count(), 5);
}

#[test]
fn cancelled_token_stops_before_the_first_tick() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 1);
    let mut dashboard =
        Dashboard::with_clock(LogStore::ephemeral().unwrap(), settings(&log), clock());
    let mut surface = HeadlessSurface::default();
    dashboard.cancellation_token().cancel();

    let reason = dashboard.run(&mut surface).unwrap();

    assert_eq!(reason, StopReason::Cancelled);
    assert_eq!(dashboard.ticks(), 0);
    // labels drawn, values never written
    assert!(surface.row(2).starts_with("|Requests per second:"));
    assert_eq!(surface.row(2).trim_end(), "|Requests per second:");
}

#[test]
fn cancellation_is_observed_while_waiting() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 1);
    let mut settings = settings(&log);
    settings.refresh_interval = Duration::from_secs(30);
    let mut dashboard = Dashboard::with_clock(LogStore::ephemeral().unwrap(), settings, clock());
    let token = dashboard.cancellation_token();
    let mut surface = HeadlessSurface::default();

    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        token.cancel();
    });
    let reason = dashboard.run(&mut surface).unwrap();
    canceller.join().unwrap();

    assert_eq!(reason, StopReason::Cancelled);
    assert_eq!(dashboard.ticks(), 1);
}

#[test]
fn missing_log_file_stops_with_an_error() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    let mut dashboard =
        Dashboard::with_clock(LogStore::ephemeral().unwrap(), settings(&log), clock());
    let mut surface = HeadlessSurface::default();

    let err = dashboard.run(&mut surface).unwrap_err();

    assert!(matches!(err, DashboardError::LogFile { .. }));
    assert_eq!(dashboard.state(), DashboardState::Stopped);
    assert_eq!(dashboard.ticks(), 0);
}

#[test]
fn follow_mode_ingests_appended_lines_each_tick() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 2);
    let clock = clock();
    let mut dashboard = Dashboard::with_clock(LogStore::ephemeral().unwrap(), settings(&log), clock.clone())
        .follow(LogTail::new(&log));
    let mut surface = HeadlessSurface::default().with_keys([Some(Key::Char('q'))]);

    // Act: first run ingests the existing lines
    dashboard.run(&mut surface).unwrap();
    let mut file = std::fs::OpenOptions::new().append(true).open(&log).unwrap();
    for _ in 0..3 {
        writeln!(file, "{LOG_LINE}").unwrap();
    }
    clock.advance(Duration::from_secs(1));
    surface.push_key(Some(Key::Char('Q')));
    dashboard.run(&mut surface).unwrap();

    // Assert
    assert_eq!(dashboard.store().count().unwrap(), 5);
    assert!(surface.row(2)[26..].starts_with("3.0"));
    assert!(surface.row(3)[26..].starts_with('5'));
}

#[test]
fn persistent_store_size_is_reported() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 1);
    let store = LogStore::persistent(dir.path().join("peek.db")).unwrap();
    let mut settings = settings(&log);
    settings.byte_unit = crate::dashboard::ByteUnit::Bytes;
    let mut dashboard = Dashboard::with_clock(store, settings, clock());
    let mut surface = HeadlessSurface::default().with_keys([Some(Key::Interrupt)]);

    dashboard.run(&mut surface).unwrap();

    let size = std::fs::metadata(dir.path().join("peek.db")).unwrap().len();
    assert!(size > 0);
    assert!(surface.row(8)[26..].starts_with(&format!("{size} Bytes")));
}

#[test]
fn checked_at_uses_the_dashboard_clock() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 1);
    let start: SystemTime = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut dashboard = Dashboard::with_clock(
        LogStore::ephemeral().unwrap(),
        settings(&log),
        ManualClock::new(start),
    );
    let mut surface = HeadlessSurface::default().with_keys([Some(Key::Char('q'))]);

    dashboard.run(&mut surface).unwrap();

    let expected = chrono::DateTime::<chrono::Local>::from(start)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    assert!(surface.row(9)[26..].starts_with(&expected));
}

#[test]
fn rerunning_resumes_without_redrawing_the_layout() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("access.log");
    write_log(&log, 1);
    let mut dashboard =
        Dashboard::with_clock(LogStore::ephemeral().unwrap(), settings(&log), clock());
    let mut surface = HeadlessSurface::default().with_keys([Some(Key::Char('q'))]);
    dashboard.run(&mut surface).unwrap();
    surface.print_at(&" ".repeat(20), 1, 1).unwrap();

    // Act
    surface.push_key(Some(Key::Char('q')));
    let reason = dashboard.run(&mut surface).unwrap();

    // Assert
    assert_eq!(reason, StopReason::KeyPressed);
    assert_eq!(dashboard.state(), DashboardState::Stopped);
    assert_eq!(dashboard.ticks(), 2);
    // the title label was not written again
    assert!(!surface.row(1).contains("Nginx Statistics"));
    // one layout refresh, then one per tick
    assert_eq!(surface.refresh_count(), 3);
}
