//! Technitium DNS Server management API client.
//!
//! Token-authenticated HTTP API; every call is a GET with query parameters
//! against `{base}/api/…` and returns a `{ status, response }` envelope.

mod client;
mod error;
mod http;
mod types;

use reqwest::Client;

use crate::clients::common::create_http_client;

pub(crate) use types::{TechnitiumEnvelope, ZoneListResponse, ZoneRecordsResponse};

/// Maximum retry attempts for transient failures.
pub(crate) const MAX_RETRIES: u32 = 3;

/// Technitium DNS Server client.
pub struct TechnitiumClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
}

impl TechnitiumClient {
    /// `base_url` is the server root, e.g. `"https://dns.example.net:5380"`.
    pub fn new(base_url: String, token: String, skip_cert_verify: bool) -> Self {
        Self {
            client: create_http_client(skip_cert_verify),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}
