//! Client factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsApiClient;
use crate::types::ProviderCredentials;

#[cfg(feature = "godaddy")]
use crate::clients::GodaddyClient;
#[cfg(feature = "technitium")]
use crate::clients::TechnitiumClient;

/// Creates a [`DnsApiClient`] instance from the given credentials.
///
/// The concrete client type is determined by the [`ProviderCredentials`]
/// variant. The returned client is wrapped in `Arc<dyn DnsApiClient>` for
/// sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_steward_provider::{ProviderCredentials, create_client};
///
/// let client = create_client(ProviderCredentials::Technitium {
///     base_url: "https://dns.example.net:5380".to_string(),
///     token: "your-token".to_string(),
///     skip_cert_verify: false,
/// });
/// ```
pub fn create_client(credentials: ProviderCredentials) -> Result<Arc<dyn DnsApiClient>> {
    match credentials {
        #[cfg(feature = "technitium")]
        ProviderCredentials::Technitium {
            base_url,
            token,
            skip_cert_verify,
        } => Ok(Arc::new(TechnitiumClient::new(
            base_url,
            token,
            skip_cert_verify,
        ))),
        #[cfg(feature = "godaddy")]
        ProviderCredentials::Godaddy {
            api_url,
            key,
            secret,
        } => Ok(Arc::new(GodaddyClient::new(api_url, key, secret))),
    }
}
