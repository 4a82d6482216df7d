mod field_tests;

use crate::record::Record;

pub(crate) fn record(ip: &str, verb: &str, byte_count: u64) -> Record {
    Record {
        ip_address: ip.to_string(),
        timestamp: "10/Oct/2000:13:55:36 -0700".to_string(),
        verb: verb.to_string(),
        path: "/index.html".to_string(),
        status: 200,
        byte_count,
        referrer: "-".to_string(),
        user_agent: "curl/8.0".to_string(),
    }
}
