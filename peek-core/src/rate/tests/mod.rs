use crate::rate::{Clock, ManualClock, RateTracker};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn clock() -> ManualClock {
    ManualClock::new(UNIX_EPOCH + Duration::from_secs(1_700_000_000))
}

#[test]
fn first_sample_is_zero() {
    for total in [0, 1, 150, u64::MAX] {
        let mut tracker = RateTracker::with_clock(clock());
        assert_eq!(tracker.sample(total), 0.0);
    }
}

#[test]
fn rate_over_one_second() {
    // Arrange
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(100);

    // Act
    clock.advance(Duration::from_secs(1));
    let rate = tracker.sample(150);

    // Assert
    assert_eq!(rate, 50.0);
}

#[test]
fn rate_is_rounded_to_one_decimal() {
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(0);

    clock.advance(Duration::from_secs(3));

    assert_eq!(tracker.sample(10), 3.3);
}

#[test]
fn same_second_samples_reuse_previous_rate() {
    // Arrange
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(0);
    clock.advance(Duration::from_secs(2));
    assert_eq!(tracker.sample(20), 10.0);

    // Act: sub-second step
    clock.advance(Duration::from_millis(300));
    let rate = tracker.sample(500);

    // Assert
    assert_eq!(rate, 10.0);
    assert_eq!(tracker.last_rate(), 10.0);
}

#[test]
fn same_second_before_any_rate_is_zero() {
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());

    tracker.sample(5);

    assert_eq!(tracker.sample(50), 0.0);
}

#[test]
fn zero_elapsed_keeps_the_earlier_baseline() {
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(0);
    tracker.sample(30); // same second, ignored as a baseline

    clock.advance(Duration::from_secs(2));

    assert_eq!(tracker.sample(40), 20.0);
}

#[test]
fn unchanged_counter_is_zero_rate() {
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(42);

    clock.advance(Duration::from_secs(5));

    assert_eq!(tracker.sample(42), 0.0);
}

#[test]
fn counter_reset_clamps_to_zero() {
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(1_000);
    clock.advance(Duration::from_secs(1));

    assert_eq!(tracker.sample(10), 0.0);

    // The reset value becomes the new baseline.
    clock.advance(Duration::from_secs(1));
    assert_eq!(tracker.sample(25), 15.0);
}

#[test]
fn clock_stepping_backwards_does_not_divide() {
    let clock = clock();
    let mut tracker = RateTracker::with_clock(clock.clone());
    tracker.sample(0);
    clock.advance(Duration::from_secs(1));
    assert_eq!(tracker.sample(7), 7.0);

    clock.set(SystemTime::UNIX_EPOCH);
    let rate = tracker.sample(100);

    assert_eq!(rate, 7.0);
    assert!(rate.is_finite());
}

#[test]
fn manual_clock_clones_share_time() {
    let a = clock();
    let b = a.clone();

    a.advance(Duration::from_secs(10));

    assert_eq!(a.now(), b.now());
}
