use crate::conf::PeekConfig;
use crate::ingest::{IngestStats, ingest_file};
use crate::store::{LogStore, StoreMode};
use anyhow::{Context, Result};

/// One-shot ingest of the configured access log.
pub fn run(config: &PeekConfig) -> Result<IngestStats> {
    let mode = config.store_mode();
    if mode == StoreMode::Ephemeral {
        tracing::warn!("ingesting into an ephemeral store, records are dropped on exit");
    }

    let store = LogStore::open(mode).context("failed to open log store")?;
    let stats = ingest_file(&config.log_file, &store)
        .with_context(|| format!("failed to ingest {}", config.log_file.display()))?;

    tracing::info!(
        log_file = %config.log_file.display(),
        inserted = stats.inserted,
        skipped = stats.skipped,
        "ingest finished"
    );

    println!(
        "✔ Ingested {} records from {}",
        stats.inserted,
        config.log_file.display()
    );
    if stats.skipped > 0 {
        println!("✔ Skipped {} malformed lines", stats.skipped);
    }
    println!("✔ Store now holds {} records", store.count()?);

    Ok(stats)
}
