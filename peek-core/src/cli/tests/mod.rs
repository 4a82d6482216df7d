
use std::fs;
use std::path::Path;

pub(crate) const LINES: &[&str] = &[
    r#"10.0.0.1 - - [01/Jan/2024:00:00:00 +0000] "GET / HTTP/1.1" 200 1000 "-" "curl/8.0""#,
    r#"10.0.0.1 - - [01/Jan/2024:00:00:01 +0000] "GET /about HTTP/1.1" 200 2000 "-" "curl/8.0""#,
    r#"10.0.0.2 - - [01/Jan/2024:00:00:02 +0000] "POST /login HTTP/1.1" 302 0 "-" "curl/8.0""#,
    r#"10.0.0.3 - - [01/Jan/2024:00:00:03 +0000] "GET / HTTP/1.1" 404 500 "-" "curl/8.0""#,
    "not an access log line",
];

pub(crate) fn write_fixture(path: &Path) {
    let mut body = LINES.join("\n");
    body.push('\n');
    fs::write(path, body).unwrap();
}
