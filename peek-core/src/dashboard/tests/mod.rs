mod run_tests;

use crate::record::Record;
use std::path::Path;

pub(crate) const LOG_LINE: &str = r#"10.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.1" 200 1500000 "-" "curl/8.0""#;

pub(crate) fn record(ip: &str, verb: &str, byte_count: u64) -> Record {
    Record {
        ip_address: ip.to_string(),
        timestamp: "10/Oct/2000:13:55:36 -0700".to_string(),
        verb: verb.to_string(),
        path: "/".to_string(),
        status: 200,
        byte_count,
        referrer: "-".to_string(),
        user_agent: "curl/8.0".to_string(),
    }
}

pub(crate) fn write_log(path: &Path, lines: usize) {
    let body: String = (0..lines).map(|_| format!("{LOG_LINE}\n")).collect();
    std::fs::write(path, body).unwrap();
}
