//! Shared client helpers.

use std::time::Duration;

use reqwest::Client;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client with timeouts configured.
///
/// `accept_invalid_certs` supports Technitium servers running with
/// self-signed certificates; leave it off for anything else.
pub fn create_http_client(accept_invalid_certs: bool) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .expect("Failed to create HTTP client")
}

// ============ Owner-name handling ============

/// Strip a trailing dot from a domain name.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Convert a fully-qualified name to its zone-relative form.
/// `"www.example.com"` + `"example.com"` -> `"www"`;
/// `"example.com"` + `"example.com"` -> `"@"`.
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// Convert a zone-relative name to its fully-qualified form.
/// `"www"` + `"example.com"` -> `"www.example.com"`;
/// `"@"` + `"example.com"` -> `"example.com"`.
pub fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone
    } else {
        format!("{relative_name}.{zone}")
    }
}
