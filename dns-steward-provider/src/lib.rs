//! # dns-steward-provider
//!
//! Client library for DNS server management APIs, with a typed record model
//! and a structural identity relation for multi-valued record sets.
//!
//! ## Supported Servers
//!
//! | Server | Feature Flag | Auth Method |
//! |--------|-------------|-------------|
//! | [Technitium DNS Server](https://technitium.com/dns/) | `technitium` | API token |
//! | [GoDaddy DNS](https://developer.godaddy.com/doc/endpoint/domains/) | `godaddy` | `sso-key` header |
//!
//! ## Feature Flags
//!
//! - **`all-clients`** *(default)* — both clients above.
//! - **`technitium`** / **`godaddy`** — enable one client.
//! - **`native-tls`** *(default)* / **`rustls`** — TLS backend selection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_steward_provider::{
//!     DnsApiClient, DnsRecord, ProviderCredentials, RecordData, create_client,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_client(ProviderCredentials::Technitium {
//!         base_url: "https://dns.example.net:5380".to_string(),
//!         token: "your-token".to_string(),
//!         skip_cert_verify: false,
//!     })?;
//!
//!     let record = DnsRecord::new("www", 3600, RecordData::A {
//!         address: "192.0.2.10".to_string(),
//!     });
//!     client.add_record("example.com", &record).await?;
//!
//!     for zone in client.list_zones().await? {
//!         println!("{} ({:?})", zone.name, zone.zone_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Record Identity
//!
//! Multi-valued record types (A, MX, TXT, NS, SRV, …) allow several records
//! per owner name; [`DnsRecord::same_key`] decides whether two records are
//! the same one (an edit) or siblings (a new entry). Getting this wrong
//! silently deletes or merges unrelated records, so the relation is the
//! load-bearing part of the model — see the per-type key tuples on
//! [`RecordData`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Transient errors
//! (`NetworkError`, `Timeout`, `RateLimited`) are retried internally with
//! exponential backoff; everything else fails the call.

mod clients;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export factory functions
pub use factory::create_client;

// Re-export the capability trait (internal traits stay private)
pub use traits::DnsApiClient;

// Re-export types
pub use types::{
    CredentialValidationError, DnsRecord, DnsZone, ProviderCredentials, ProviderKind, RecordData,
    RecordType, UpdateRecord, ZoneType,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete clients (behind feature flags)
#[cfg(feature = "technitium")]
pub use clients::TechnitiumClient;

#[cfg(feature = "godaddy")]
pub use clients::GodaddyClient;
