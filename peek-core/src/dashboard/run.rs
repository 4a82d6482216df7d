use crate::dashboard::DashboardError;
use crate::dashboard::cancel::CancellationToken;
use crate::dashboard::constants::LOOP_IDLE_SLEEP;
use crate::dashboard::layout::{draw_border, static_rows, write_rows};
use crate::dashboard::metrics::MetricsSnapshot;
use crate::dashboard::settings::DashboardSettings;
use crate::dashboard::surface::Surface;
use crate::ingest::LogTail;
use crate::rate::{Clock, RateTracker, SystemClock};
use crate::store::LogStore;
use std::thread;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    /// Constructed, nothing drawn yet.
    Idle,
    /// Static layout drawn, ticking.
    Rendering,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The user pressed a stop key on the surface.
    KeyPressed,
    /// The cancellation token was triggered.
    Cancelled,
}

/// Refreshing statistics view over a [`LogStore`].
///
/// [`run`](Dashboard::run) draws the static layout once and then, every
/// `refresh_interval`, recomputes all metrics and redraws only the values.
/// Any error during a tick stops the loop and is returned.
///
/// A stopped dashboard may be run again on the same surface. It resumes
/// ticking with its store, rate baseline and follow offset intact; the
/// layout is not redrawn.
pub struct Dashboard<C: Clock + Clone = SystemClock> {
    store: LogStore,
    settings: DashboardSettings,
    clock: C,
    rate: RateTracker<C>,
    tail: Option<LogTail>,
    cancel: CancellationToken,
    state: DashboardState,
    ticks: u64,
    layout_drawn: bool,
}

impl Dashboard<SystemClock> {
    pub fn new(store: LogStore, settings: DashboardSettings) -> Self {
        Self::with_clock(store, settings, SystemClock)
    }
}

impl<C: Clock + Clone> Dashboard<C> {
    pub fn with_clock(store: LogStore, settings: DashboardSettings, clock: C) -> Self {
        Self {
            store,
            settings,
            rate: RateTracker::with_clock(clock.clone()),
            clock,
            tail: None,
            cancel: CancellationToken::new(),
            state: DashboardState::Idle,
            ticks: 0,
            layout_drawn: false,
        }
    }

    /// Ingest lines appended to the access log at the start of every tick.
    pub fn follow(mut self, tail: LogTail) -> Self {
        self.tail = Some(tail);
        self
    }

    /// A token that stops the loop at the next tick boundary when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// Completed refresh ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn run(&mut self, surface: &mut impl Surface) -> Result<StopReason, DashboardError> {
        let result = self.run_inner(surface);
        self.state = DashboardState::Stopped;

        match &result {
            Ok(reason) => tracing::info!(?reason, ticks = self.ticks, "dashboard stopped"),
            Err(e) => tracing::error!(error = %e, ticks = self.ticks, "dashboard failed"),
        }
        result
    }

    fn run_inner(&mut self, surface: &mut impl Surface) -> Result<StopReason, DashboardError> {
        if !self.layout_drawn {
            draw_border(surface)?;
            let labels = static_rows(&self.settings.verb, self.settings.recent_window.is_some());
            write_rows(surface, &labels)?;
            surface.refresh()?;
            self.layout_drawn = true;
        }
        self.state = DashboardState::Rendering;

        tracing::info!(
            log_file = %self.settings.log_file.display(),
            interval_secs = self.settings.refresh_interval.as_secs_f64(),
            "dashboard started"
        );

        loop {
            if self.cancel.is_cancelled() {
                return Ok(StopReason::Cancelled);
            }

            self.tick(surface)?;

            if stop_requested(surface)? {
                return Ok(StopReason::KeyPressed);
            }

            if let Some(reason) = self.wait(surface)? {
                return Ok(reason);
            }
        }
    }

    fn tick(&mut self, surface: &mut impl Surface) -> Result<(), DashboardError> {
        if let Some(tail) = &mut self.tail {
            let stats = tail.read_new(&self.store)?;
            if stats.inserted > 0 || stats.skipped > 0 {
                tracing::debug!(
                    inserted = stats.inserted,
                    skipped = stats.skipped,
                    "followed access log"
                );
            }
        }

        let snapshot =
            MetricsSnapshot::collect(&self.store, &mut self.rate, &self.settings, self.clock.now())?;
        write_rows(surface, &snapshot.rows(&self.settings))?;
        surface.refresh()?;

        self.ticks += 1;
        Ok(())
    }

    /// Sleep until the next tick, still answering the stop key and the token.
    fn wait(&self, surface: &mut impl Surface) -> Result<Option<StopReason>, DashboardError> {
        let deadline = Instant::now() + self.settings.refresh_interval;

        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            if self.cancel.is_cancelled() {
                return Ok(Some(StopReason::Cancelled));
            }
            if stop_requested(surface)? {
                return Ok(Some(StopReason::KeyPressed));
            }
            thread::sleep((deadline - now).min(LOOP_IDLE_SLEEP));
        }
    }
}

fn stop_requested(surface: &mut impl Surface) -> Result<bool, DashboardError> {
    Ok(surface.get_key()?.is_some_and(|key| key.is_stop()))
}
