//! Shared HTTP request plumbing.
//!
//! Each client builds its own `RequestBuilder` (auth schemes differ too much
//! to unify) and hands it here for the common part: sending, logging,
//! transient-error classification and bounded retry.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::utils::log_sanitizer::{sanitize_url, truncate_for_log};

pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status_code, body_text)`.
    ///
    /// HTTP 429 maps to [`ApiError::RateLimited`] (honoring `Retry-After`),
    /// 502–504 to a retryable [`ApiError::NetworkError`]; transport timeouts
    /// to [`ApiError::Timeout`]. Other statuses are returned to the caller,
    /// which owns API-level error decoding.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{provider_name}] {method_name} {}", sanitize_url(url));

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // must be read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ApiError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ApiError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body, mapping failures to [`ApiError::ParseError`].
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Like [`execute_request`](Self::execute_request), with retries.
    ///
    /// Only transient errors (network, timeout, rate limit) are retried,
    /// with exponential backoff. Business errors return immediately.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ApiError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, provider_name, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use; a streaming body cannot be cloned
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, provider_name, method_name, url)
                    .await;
            };

            match Self::execute_request(req, provider_name, method_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

fn is_retryable(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::NetworkError { .. } | ApiError::Timeout { .. } | ApiError::RateLimited { .. }
    )
}

/// `Retry-After` wins (capped at 30s) when present; exponential backoff
/// otherwise.
fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    if let ApiError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, … capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn retryable_classification() {
        let network = ApiError::NetworkError {
            provider: "t".into(),
            detail: "refused".into(),
        };
        let timeout = ApiError::Timeout {
            provider: "t".into(),
            detail: "elapsed".into(),
        };
        let limited = ApiError::RateLimited {
            provider: "t".into(),
            retry_after: None,
            raw_message: None,
        };
        assert!(is_retryable(&network));
        assert!(is_retryable(&timeout));
        assert!(is_retryable(&limited));

        let auth = ApiError::InvalidCredentials {
            provider: "t".into(),
            raw_message: None,
        };
        let parse = ApiError::ParseError {
            provider: "t".into(),
            detail: "bad json".into(),
        };
        assert!(!is_retryable(&auth));
        assert!(!is_retryable(&parse));
    }

    #[test]
    fn backoff_progression() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(30), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_takes_precedence_and_is_capped() {
        let e = ApiError::RateLimited {
            provider: "t".into(),
            retry_after: Some(7),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(7));

        let e = ApiError::RateLimited {
            provider: "t".into(),
            retry_after: Some(300),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
