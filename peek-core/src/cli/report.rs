use crate::conf::PeekConfig;
use crate::dashboard::{ByteUnit, format_bytes};
use crate::ingest::ingest_file;
use crate::store::{LogStore, Occurrences, RecordField, StoreMode};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

/// One-off summary of everything in the store.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_requests: u64,
    pub unique_ips: u64,
    pub bytes_sent: u64,
    pub top_ips: Occurrences,
    pub top_verbs: Occurrences,
    pub top_statuses: Occurrences,
    pub top_paths: Occurrences,
}

impl Report {
    pub fn collect(store: &LogStore) -> Result<Self> {
        Ok(Self {
            total_requests: store.count()?,
            unique_ips: store.distinct_ip_count()?,
            bytes_sent: store.total_byte_count()?,
            top_ips: store.occurrences_by_field(RecordField::Ip)?,
            top_verbs: store.occurrences_by_field(RecordField::Verb)?,
            top_statuses: store.occurrences_by_field(RecordField::Status)?,
            top_paths: store.occurrences_by_field(RecordField::Path)?,
        })
    }

    pub fn render_text(&self, unit: ByteUnit, precision: usize) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", "Access Log Report".bold());
        let _ = writeln!(out, "=================");
        let _ = writeln!(out, "Requests:    {}", self.total_requests.cyan());
        let _ = writeln!(out, "Unique IPs:  {}", self.unique_ips.cyan());
        let _ = writeln!(
            out,
            "Data sent:   {}",
            format_bytes(self.bytes_sent, unit, precision).cyan()
        );

        for (title, occurrences) in [
            ("Top IP addresses", &self.top_ips),
            ("Top verbs", &self.top_verbs),
            ("Top statuses", &self.top_statuses),
            ("Top paths", &self.top_paths),
        ] {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", title.bold());
            if occurrences.is_empty() {
                let _ = writeln!(out, "  <none>");
            }
            for (value, count) in occurrences {
                let _ = writeln!(out, "  {:<40} {:>8}", value, count.green());
            }
        }

        out
    }
}

pub fn run(config: &PeekConfig, json: bool) -> Result<()> {
    let mode = config.store_mode();
    let store = LogStore::open(mode.clone()).context("failed to open log store")?;

    // nothing persisted to report on otherwise
    if mode == StoreMode::Ephemeral {
        ingest_file(&config.log_file, &store)
            .with_context(|| format!("failed to ingest {}", config.log_file.display()))?;
    }

    let report = Report::collect(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let settings = config.dashboard_settings()?;
        print!("{}", report.render_text(settings.byte_unit, settings.precision));
    }

    Ok(())
}
