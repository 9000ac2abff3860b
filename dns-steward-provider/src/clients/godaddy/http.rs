//! GoDaddy HTTP request methods.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};

use super::types::GodaddyErrorBody;
use super::{GodaddyClient, MAX_RETRIES};

impl GodaddyClient {
    fn auth_header(&self) -> String {
        format!("sso-key {}:{}", self.key, self.secret)
    }

    /// Send a request and return the body on 2xx; decode `{ code, message }`
    /// and map it otherwise.
    async fn request_raw<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        context: ErrorContext,
    ) -> Result<String> {
        let url = format!("{}{}", self.api_url, path);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let (status, text) = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            method.as_str(),
            &url,
            MAX_RETRIES,
        )
        .await?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let raw = match serde_json::from_str::<GodaddyErrorBody>(&text) {
            Ok(GodaddyErrorBody {
                code,
                message: Some(message),
            }) => RawApiError {
                code,
                message,
            },
            _ => RawApiError::new(format!("bad http reply status ({status})")),
        };
        log::error!("[{}] API error: {}", self.provider_name(), raw.message);
        Err(self.map_error(raw, context))
    }

    /// GET a JSON payload.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self
            .request_raw::<()>(Method::GET, path, None, context)
            .await?;
        HttpUtils::parse_json(&text, self.provider_name())
    }

    /// Send a mutation whose success reply carries no payload we care about.
    pub(crate) async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        self.request_raw(method, path, Some(body), context).await?;
        Ok(())
    }

    /// Send a body-less mutation (DELETE).
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        context: ErrorContext,
    ) -> Result<()> {
        self.request_raw::<()>(method, path, None, context).await?;
        Ok(())
    }
}
