//! Technitium error mapping.
//!
//! The API reports failures as `status: "error"` plus a free-form
//! `errorMessage`, so mapping is keyed on message substrings rather than
//! numeric codes. `status: "invalid-token"` is handled before mapping.

use crate::error::ApiError;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};

use super::TechnitiumClient;

impl ApiErrorMapper for TechnitiumClient {
    fn provider_name(&self) -> &'static str {
        "technitium"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ApiError {
        let message = raw.message.to_lowercase();

        if message.contains("invalid token") || message.contains("please login") {
            return ApiError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            };
        }

        if message.contains("already exists") {
            return if let Some(zone) = context.zone.filter(|_| message.contains("zone")) {
                ApiError::ZoneExists {
                    provider: self.provider_name().to_string(),
                    zone,
                    raw_message: Some(raw.message),
                }
            } else {
                ApiError::RecordExists {
                    provider: self.provider_name().to_string(),
                    record_name: context
                        .record_name
                        .unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                }
            };
        }

        if message.contains("no such zone")
            || (message.contains("zone") && message.contains("does not exist"))
            || (message.contains("zone") && message.contains("was not found"))
        {
            return ApiError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            };
        }

        if message.contains("no matching record")
            || (message.contains("record") && message.contains("does not exist"))
            || (message.contains("record") && message.contains("was not found"))
        {
            return ApiError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            };
        }

        if message.contains("access was denied") || message.contains("permission") {
            return ApiError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            };
        }

        self.unknown_error(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TechnitiumClient {
        TechnitiumClient::new("https://dns.local:5380".to_string(), String::new(), false)
    }

    fn ctx_with(zone: Option<&str>, record: Option<&str>) -> ErrorContext {
        ErrorContext {
            zone: zone.map(ToString::to_string),
            record_name: record.map(ToString::to_string),
        }
    }

    #[test]
    fn invalid_token_message() {
        let c = client();
        let err = c.map_error(
            RawApiError::new("Invalid token was provided. Please login again."),
            ErrorContext::default(),
        );
        assert!(matches!(err, ApiError::InvalidCredentials { .. }));
    }

    #[test]
    fn record_exists_message() {
        let c = client();
        let err = c.map_error(
            RawApiError::new("Cannot add record: record already exists."),
            ctx_with(None, Some("www")),
        );
        assert!(matches!(
            err,
            ApiError::RecordExists { record_name, .. } if record_name == "www"
        ));
    }

    #[test]
    fn zone_exists_message() {
        let c = client();
        let err = c.map_error(
            RawApiError::new("Zone already exists: example.com"),
            ctx_with(Some("example.com"), None),
        );
        assert!(matches!(
            err,
            ApiError::ZoneExists { zone, .. } if zone == "example.com"
        ));
    }

    #[test]
    fn zone_not_found_message() {
        let c = client();
        let err = c.map_error(
            RawApiError::new("No such zone was found: example.com"),
            ctx_with(Some("example.com"), None),
        );
        assert!(matches!(
            err,
            ApiError::ZoneNotFound { zone, .. } if zone == "example.com"
        ));
    }

    #[test]
    fn record_not_found_message() {
        let c = client();
        let err = c.map_error(
            RawApiError::new("Cannot delete record: no matching record was found."),
            ctx_with(None, Some("www")),
        );
        assert!(matches!(err, ApiError::RecordNotFound { .. }));
    }

    #[test]
    fn access_denied_message() {
        let c = client();
        let err = c.map_error(
            RawApiError::new("Access was denied for this zone."),
            ErrorContext::default(),
        );
        assert!(matches!(err, ApiError::PermissionDenied { .. }));
    }

    #[test]
    fn fallback_to_unknown() {
        let c = client();
        let err = c.map_error(
            RawApiError::with_code("error", "something unexpected"),
            ErrorContext::default(),
        );
        assert!(matches!(
            err,
            ApiError::Unknown { raw_message, .. } if raw_message == "something unexpected"
        ));
    }
}
