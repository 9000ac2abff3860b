//! Log sanitization utilities
//!
//! Prevents sensitive data (API tokens in query strings, DKIM keys, long
//! response bodies) from being fully exposed in debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` characters with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Redact credential-bearing query parameters before a URL is logged.
///
/// The Technitium API carries its token as a `token` query parameter, so a
/// raw request URL must never reach the logs.
pub fn sanitize_url(url: &str) -> String {
    const SENSITIVE: [&str; 3] = ["token", "pass", "proxyPassword"];

    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let sanitized: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SENSITIVE.contains(&key) => format!("{key}=***"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{base}?{}", sanitized.join("&"))
}
