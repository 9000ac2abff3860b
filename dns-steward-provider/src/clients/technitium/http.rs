//! Technitium HTTP request methods.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};

use super::{MAX_RETRIES, TechnitiumClient, TechnitiumEnvelope};

impl TechnitiumClient {
    /// Perform an API call and unwrap the `{ status, response }` envelope.
    ///
    /// Every Technitium endpoint is a GET with query parameters; the token
    /// rides along as a parameter and is redacted from logs by the shared
    /// HTTP layer.
    pub(crate) async fn call_api<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<Option<T>> {
        let mut url = format!(
            "{}/api/{}?token={}",
            self.base_url,
            path,
            urlencoding::encode(&self.token)
        );
        for (key, value) in params {
            url.push_str(&format!("&{key}={}", urlencoding::encode(value)));
        }

        let request = self.client.get(&url);
        let (_status, body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            MAX_RETRIES,
        )
        .await?;

        let envelope: TechnitiumEnvelope<T> = HttpUtils::parse_json(&body, self.provider_name())?;

        match envelope.status.as_str() {
            "ok" => Ok(envelope.response),
            "invalid-token" => Err(ApiError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: envelope.error_message,
            }),
            status => {
                let message = envelope
                    .error_message
                    .unwrap_or_else(|| format!("API returned status '{status}'"));
                log::error!("[{}] API error: {message}", self.provider_name());
                Err(self.map_error(RawApiError::with_code(status, message), context))
            }
        }
    }

    /// Like [`call_api`](Self::call_api), requiring a response payload.
    pub(crate) async fn call_api_expect<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        self.call_api(path, params, context)
            .await?
            .ok_or_else(|| self.parse_error("response payload missing"))
    }
}
