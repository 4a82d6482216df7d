use crate::dashboard::DashboardError;
use crate::dashboard::constants::{CHECKED_AT_FORMAT, RATE_WIDTH, VALUE_WIDTH, VALUE_X};
use crate::dashboard::format::{format_bytes, pad_right};
use crate::dashboard::layout::{
    ROW_BYTES_SENT, ROW_CHECKED_AT, ROW_LOG_SIZE, ROW_RATE, ROW_RECENT_IPS, ROW_REQUESTS,
    ROW_STORE_SIZE, ROW_UNIQUE_IPS, ScreenRow,
};
use crate::dashboard::settings::DashboardSettings;
use crate::rate::{Clock, RateTracker};
use crate::store::{LogStore, RecordField};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

/// Every value shown on one refresh tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_per_second: f64,
    pub request_count: u64,
    pub unique_ips: u64,
    pub recent_unique_ips: Option<u64>,
    pub bytes_sent: u64,
    pub log_file_size: u64,
    pub store_size: u64,
    pub checked_at: DateTime<Local>,
}

impl MetricsSnapshot {
    pub fn collect<C: Clock>(
        store: &LogStore,
        rate: &mut RateTracker<C>,
        settings: &DashboardSettings,
        now: SystemTime,
    ) -> Result<Self, DashboardError> {
        let request_count = store.count_matching(RecordField::Verb, &settings.verb)?;
        let requests_per_second = rate.sample(request_count);

        let recent_unique_ips = match settings.recent_window {
            Some(window) => {
                let end = DateTime::<Utc>::from(now);
                let start = DateTime::<Utc>::from(now.checked_sub(window).unwrap_or(UNIX_EPOCH));
                Some(store.distinct_ip_count_between(start, end)?)
            }
            None => None,
        };

        let log_file_size = fs::metadata(&settings.log_file)
            .map_err(|source| DashboardError::LogFile {
                path: settings.log_file.clone(),
                source,
            })?
            .len();

        Ok(Self {
            requests_per_second,
            request_count,
            unique_ips: store.distinct_ip_count()?,
            recent_unique_ips,
            bytes_sent: store.total_byte_count()?,
            log_file_size,
            store_size: store.size_on_disk()?,
            checked_at: DateTime::<Local>::from(now),
        })
    }

    /// Values for the right-hand column, in the layout of [`static_rows`](super::static_rows).
    pub fn rows(&self, settings: &DashboardSettings) -> Vec<ScreenRow> {
        let unit = settings.byte_unit;
        let precision = settings.precision;
        let value = |text: String, y| ScreenRow::new(pad_right(&text, VALUE_WIDTH), VALUE_X, y);

        let rate = pad_right(&format!("{:.1}", self.requests_per_second), RATE_WIDTH);

        let mut rows = vec![
            value(rate, ROW_RATE),
            value(self.request_count.to_string(), ROW_REQUESTS),
            value(self.unique_ips.to_string(), ROW_UNIQUE_IPS),
        ];
        if let Some(recent) = self.recent_unique_ips {
            rows.push(value(format!("{recent:0>3}"), ROW_RECENT_IPS));
        }
        rows.extend([
            value(format_bytes(self.bytes_sent, unit, precision), ROW_BYTES_SENT),
            value(format_bytes(self.log_file_size, unit, precision), ROW_LOG_SIZE),
            value(format_bytes(self.store_size, unit, precision), ROW_STORE_SIZE),
            value(
                self.checked_at.format(CHECKED_AT_FORMAT).to_string(),
                ROW_CHECKED_AT,
            ),
        ]);
        rows
    }
}
