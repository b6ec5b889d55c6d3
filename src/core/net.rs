// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Plain HTTP on port 80 — no TLS; if
// the host ever forces HTTPS, the redirect surfaces here as an error
// instead of a silently empty body.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HOST, NET_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((HOST, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    // The site serves an empty shell to unknown clients; a browser-ish
    // user agent gets the real table.
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, HOST, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status_is_ok(status) {
        return Err(format!("HTTP error: {} {}{}", status, HOST, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// Strict status-line check: the code itself must be 200, not merely the
/// digits 200 appearing somewhere in the reason phrase.
fn status_is_ok(status_line: &str) -> bool {
    status_line.starts_with("HTTP/")
        && status_line.split_whitespace().nth(1) == Some("200")
}

#[cfg(test)]
mod tests {
    use super::status_is_ok;

    #[test]
    fn only_a_200_status_code_passes() {
        assert!(status_is_ok("HTTP/1.0 200 OK"));
        assert!(status_is_ok("HTTP/1.1 200 OK"));

        assert!(!status_is_ok("HTTP/1.1 301 Moved Permanently"));
        assert!(!status_is_ok("HTTP/1.1 404 Not Found"));
        // "200" in the reason phrase must not count
        assert!(!status_is_ok("HTTP/1.1 503 Retry-After 200"));
        assert!(!status_is_ok(""));
        assert!(!status_is_ok("garbage 200"));
    }
}
