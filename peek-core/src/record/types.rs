use serde::{Deserialize, Serialize};

/// One parsed access log entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub ip_address: String,
    /// Log-native timestamp, e.g. `10/Oct/2000:13:55:36 -0700`. Stored verbatim.
    pub timestamp: String,
    pub verb: String,
    pub path: String,
    pub status: u16,
    pub byte_count: u64,
    pub referrer: String,
    pub user_agent: String,
}
