use crate::conf::{PeekConfig, StoreKind};
use crate::dashboard::{Dashboard, HeadlessSurface, Key, StopReason, TerminalSurface};
use crate::ingest::{LogTail, ingest_file};
use crate::store::LogStore;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct DashboardArgs {
    /// Seconds between refreshes (overrides the config file)
    #[arg(long, value_name = "SECS")]
    pub refresh: Option<u64>,

    /// Keep records in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Render a single frame to stdout and exit
    #[arg(long)]
    pub once: bool,
}

impl DashboardArgs {
    /// Fold the command line overrides into `config`.
    pub fn apply(&self, config: &mut PeekConfig) {
        if let Some(refresh) = self.refresh {
            config.dashboard.refresh_interval_secs = refresh;
        }
        if self.ephemeral {
            config.store.mode = StoreKind::Ephemeral;
        }
    }
}

/// Open the store and wire up follow mode.
///
/// An ephemeral store starts empty, so it has to see the whole log: either
/// through a tail from offset 0, or through an upfront ingest when follow
/// mode is off. A persistent store already holds earlier runs and only
/// follows what is appended from now on.
pub fn build(config: &PeekConfig) -> Result<Dashboard> {
    let settings = config.dashboard_settings()?;
    let store = LogStore::open(config.store_mode()).context("failed to open log store")?;
    let log_file = &config.log_file;

    let tail = match (config.store.mode, config.dashboard.follow) {
        (StoreKind::Ephemeral, true) => Some(LogTail::new(log_file)),
        (StoreKind::Ephemeral, false) => {
            let stats = ingest_file(log_file, &store)
                .with_context(|| format!("failed to ingest {}", log_file.display()))?;
            tracing::info!(inserted = stats.inserted, skipped = stats.skipped, "log ingested");
            None
        }
        (StoreKind::Persistent, true) => Some(LogTail::at_end(log_file)?),
        (StoreKind::Persistent, false) => None,
    };

    let dashboard = Dashboard::new(store, settings);
    Ok(match tail {
        Some(tail) => dashboard.follow(tail),
        None => dashboard,
    })
}

/// Render one frame headlessly and return the screen contents.
pub fn render_once(dashboard: &mut Dashboard) -> Result<String> {
    let mut surface = HeadlessSurface::default().with_keys([Some(Key::Char('q'))]);
    dashboard.run(&mut surface)?;
    Ok(surface.contents())
}

pub fn run(config: &PeekConfig, args: &DashboardArgs) -> Result<()> {
    let mut dashboard = build(config)?;

    if args.once {
        println!("{}", render_once(&mut dashboard)?);
        return Ok(());
    }

    let token = dashboard.cancellation_token();
    ctrlc::set_handler(move || {
        tracing::info!("shutdown requested");
        token.cancel();
    })?;

    let reason = {
        let mut surface = TerminalSurface::enter().context("failed to set up the terminal")?;
        dashboard.run(&mut surface)?
        // terminal restored when the surface drops
    };

    if reason == StopReason::Cancelled {
        println!("Interrupted after {} refreshes", dashboard.ticks());
    }

    Ok(())
}
