//! Requests-per-second estimation from a cumulative counter.

mod clock;
mod tracker;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use tracker::RateTracker;
