//! Terminal dashboard
//!
//! The dashboard turns the statistics store into a screen of live numbers.
//!
//! Startup draws a border and a column of labels exactly once. After that the
//! refresh loop owns the screen: every tick it recomputes every metric from the
//! store (nothing is cached between ticks), writes the values into the right-hand
//! column, and checks whether it should stop. Between ticks it sleeps for the
//! configured refresh interval.
//!
//! Requests per second is not stored anywhere. It comes from a [`RateTracker`]
//! that compares the current request count with the count seen on the previous
//! tick.
//!
//! Drawing goes through the [`Surface`] trait so the loop runs the same way
//! against a real terminal ([`TerminalSurface`]) and against an in-memory grid
//! ([`HeadlessSurface`]) in tests.
//!
//! The overall data flow is:
//!
//! LogStore
//! MetricsSnapshot::collect (+ RateTracker)
//! MetricsSnapshot::rows
//! Surface
//!
//! [`RateTracker`]: crate::rate::RateTracker

mod cancel;
pub mod constants;
mod error;
mod format;
mod headless;
mod layout;
mod metrics;
mod run;
mod settings;
mod surface;
mod terminal;

#[cfg(test)]
mod tests;

pub use cancel::CancellationToken;
pub use error::DashboardError;
pub use format::{ByteUnit, format_bytes, pad_right};
pub use headless::HeadlessSurface;
pub use layout::{ScreenRow, draw_border, static_rows};
pub use metrics::MetricsSnapshot;
pub use run::{Dashboard, DashboardState, StopReason};
pub use settings::DashboardSettings;
pub use surface::{Key, Surface};
pub use terminal::TerminalSurface;
