use crate::rate::clock::{Clock, SystemClock};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy)]
struct Sample {
    count: u64,
    epoch_secs: u64,
}

/// Turns successive readings of a cumulative counter into a per-second rate.
///
/// Elapsed time is measured in whole seconds. Two samples within the same
/// second (or a clock that stepped backwards) reuse the previous rate and keep
/// the earlier sample as the baseline, so the next sample covers the full
/// interval.
#[derive(Debug)]
pub struct RateTracker<C = SystemClock> {
    clock: C,
    last: Option<Sample>,
    last_rate: f64,
}

impl RateTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RateTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RateTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last: None,
            last_rate: 0.0,
        }
    }

    /// Record `new_total` and return the rate since the previous sample,
    /// rounded to one decimal place.
    pub fn sample(&mut self, new_total: u64) -> f64 {
        let epoch_secs = epoch_secs(self.clock.now());

        let Some(last) = self.last else {
            self.last = Some(Sample {
                count: new_total,
                epoch_secs,
            });
            return 0.0;
        };

        let elapsed = epoch_secs.saturating_sub(last.epoch_secs);
        if elapsed == 0 {
            return self.last_rate;
        }

        let rate = if new_total < last.count {
            tracing::debug!(
                previous = last.count,
                current = new_total,
                "counter went backwards, treating as reset"
            );
            0.0
        } else {
            round_one_decimal((new_total - last.count) as f64 / elapsed as f64)
        };

        self.last = Some(Sample {
            count: new_total,
            epoch_secs,
        });
        self.last_rate = rate;
        rate
    }

    pub fn last_rate(&self) -> f64 {
        self.last_rate
    }
}

fn epoch_secs(at: SystemTime) -> u64 {
    // Pre-epoch clocks collapse to 0, which the zero-elapsed guard absorbs.
    at.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
