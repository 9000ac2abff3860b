//! GoDaddy DNS v1 API client.
//!
//! JSON REST API under `/v1/domains/{domain}/records`, authenticated with an
//! `sso-key key:secret` header. Replace-set and delete-set address all
//! records for one type+name, which matches the reconciliation engine's
//! needs directly.

mod client;
mod error;
mod http;
mod types;

use reqwest::Client;

use crate::clients::common::create_http_client;

pub(crate) use types::GodaddyRecord;

/// Maximum retry attempts for transient failures.
pub(crate) const MAX_RETRIES: u32 = 3;

pub(crate) const DOMAINS_PATH: &str = "/v1/domains";

/// GoDaddy DNS API client.
pub struct GodaddyClient {
    pub(crate) client: Client,
    pub(crate) api_url: String,
    pub(crate) key: String,
    pub(crate) secret: String,
}

impl GodaddyClient {
    /// `api_url` is the API root, e.g. `"https://api.godaddy.com"` (or the
    /// OTE endpoint for testing).
    pub fn new(api_url: String, key: String, secret: String) -> Self {
        Self {
            client: create_http_client(false),
            api_url: api_url.trim_end_matches('/').to_string(),
            key,
            secret,
        }
    }
}
