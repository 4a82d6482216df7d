use crate::record::types::Record;
use once_cell::sync::Lazy;
use regex::Regex;

// $remote_addr - $remote_user [$time_local] "$request" $status $body_bytes_sent
// "$http_referer" "$http_user_agent"
static COMBINED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?P<ip>\S+) \S+ \S+ \[(?P<ts>[^\]]+)\] "(?P<request>[^"]*)" (?P<status>\d{3}) (?P<bytes>\d+|-)(?: "(?P<referrer>[^"]*)" "(?P<agent>[^"]*)")?"#,
    )
    .expect("combined log regex must compile")
});

const MISSING: &str = "-";

/// Parse one combined-format access log line.
///
/// Returns `None` for blank or malformed lines. Lines in the plain "common"
/// format (no referrer / user agent) are accepted with both fields set to `-`.
pub fn parse_line(line: &str) -> Option<Record> {
    let caps = COMBINED.captures(line.trim_end())?;

    let mut request = caps["request"].split_whitespace();
    let verb = request.next().unwrap_or(MISSING).to_string();
    let path = request.next().unwrap_or(MISSING).to_string();

    let status = caps["status"].parse::<u16>().ok()?;

    // SQLite integers are signed; anything past i64::MAX cannot be stored.
    let byte_count = match &caps["bytes"] {
        MISSING => 0,
        bytes => bytes
            .parse::<i64>()
            .ok()
            .and_then(|n| u64::try_from(n).ok())?,
    };

    Some(Record {
        ip_address: caps["ip"].to_string(),
        timestamp: caps["ts"].to_string(),
        verb,
        path,
        status,
        byte_count,
        referrer: caps
            .name("referrer")
            .map_or(MISSING, |m| m.as_str())
            .to_string(),
        user_agent: caps
            .name("agent")
            .map_or(MISSING, |m| m.as_str())
            .to_string(),
    })
}
