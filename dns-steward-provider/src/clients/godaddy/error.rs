//! GoDaddy error mapping.
//!
//! Errors arrive as an HTTP status plus `{ code, message }`; the code string
//! is the stable part (e.g. `"UNABLE_TO_AUTHENTICATE"`, `"DUPLICATE_RECORD"`,
//! `"INVALID_VALUE_ENUM"`).

use crate::error::ApiError;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};

use super::GodaddyClient;

impl ApiErrorMapper for GodaddyClient {
    fn provider_name(&self) -> &'static str {
        "godaddy"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ApiError {
        match raw.code.as_deref() {
            Some("UNABLE_TO_AUTHENTICATE" | "INVALID_SHOPPER_ID" | "UNAUTHORIZED") => {
                ApiError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            Some("ACCESS_DENIED" | "FORBIDDEN") => ApiError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("NOT_FOUND" | "UNKNOWN_DOMAIN") => ApiError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some("DUPLICATE_RECORD") => ApiError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some(code @ ("INVALID_BODY" | "INVALID_VALUE_ENUM" | "VALUE_OVER_MAXIMUM")) => {
                ApiError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: code.to_string(),
                    detail: raw.message,
                }
            }

            Some("THROTTLED" | "TOO_MANY_REQUESTS") => ApiError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GodaddyClient {
        GodaddyClient::new(
            "https://api.godaddy.com".to_string(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn auth_error() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("UNABLE_TO_AUTHENTICATE", "bad sso-key"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ApiError::InvalidCredentials { .. }));
    }

    #[test]
    fn unknown_domain_maps_to_zone_not_found() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("UNKNOWN_DOMAIN", "domain not registered"),
            ErrorContext {
                zone: Some("example.com".to_string()),
                record_name: None,
            },
        );
        assert!(matches!(
            err,
            ApiError::ZoneNotFound { zone, .. } if zone == "example.com"
        ));
    }

    #[test]
    fn duplicate_record() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("DUPLICATE_RECORD", "record exists"),
            ErrorContext {
                zone: None,
                record_name: Some("www".to_string()),
            },
        );
        assert!(matches!(
            err,
            ApiError::RecordExists { record_name, .. } if record_name == "www"
        ));
    }

    #[test]
    fn enum_violation_is_invalid_parameter() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("INVALID_VALUE_ENUM", "type not any of: A, ..."),
            ErrorContext::default(),
        );
        assert!(matches!(err, ApiError::InvalidParameter { .. }));
    }

    #[test]
    fn throttled_maps_to_rate_limited() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("THROTTLED", "slow down"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ApiError::RateLimited { .. }));
    }

    #[test]
    fn fallback_unknown() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("SOMETHING_ELSE", "mystery"),
            ErrorContext::default(),
        );
        assert!(matches!(
            err,
            ApiError::Unknown { raw_code, .. } if raw_code.as_deref() == Some("SOMETHING_ELSE")
        ));
    }
}
