use serde::{Deserialize, Serialize};

/// Unified error type for all DNS API client operations.
///
/// Each variant carries a `provider` field identifying which client produced
/// the error, plus variant-specific context. All variants serialize for
/// structured error reporting.
///
/// # Retryable Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`RateLimited`](Self::RateLimited) are transient; the built-in HTTP layer
/// retries them with exponential backoff. Everything else fails the
/// operation immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error (DNS resolution failure, connection refused, …).
    NetworkError { provider: String, detail: String },

    /// The HTTP request timed out.
    Timeout { provider: String, detail: String },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        provider: String,
        /// Suggested wait in seconds before retrying, if the API provided one.
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    /// The provided token/key is invalid or expired.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// A record with the same name/type already exists and overwrite is off.
    RecordExists {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// The specified record was not found on the server.
    RecordNotFound {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// The specified zone does not exist on the server.
    ZoneNotFound {
        provider: String,
        zone: String,
        raw_message: Option<String>,
    },

    /// The zone already exists.
    ZoneExists {
        provider: String,
        zone: String,
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (bad TTL, malformed IP address, …).
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// The record type is not supported by this server's API.
    UnsupportedRecordType {
        provider: String,
        record_type: String,
    },

    /// The operation is not offered by this server's API at all.
    UnsupportedOperation { provider: String, operation: String },

    /// The authenticated principal lacks permission for the operation.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// Failed to parse the server's response.
    ParseError { provider: String, detail: String },

    /// Failed to serialize a request body.
    SerializationError { provider: String, detail: String },

    /// An unrecognized error from the server.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ApiError {
    /// Whether this is expected behavior (user input, missing resource, …),
    /// used for log-level classification: `warn` when `true`, `error`
    /// otherwise. Update when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::ZoneNotFound { .. }
                | Self::ZoneExists { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
                | Self::UnsupportedOperation { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")
            }
            Self::RecordNotFound {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' not found")
            }
            Self::ZoneNotFound {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone}' not found")
                }
            }
            Self::ZoneExists { provider, zone, .. } => {
                write!(f, "[{provider}] Zone '{zone}' already exists")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Unsupported record type: {record_type}")
            }
            Self::UnsupportedOperation {
                provider,
                operation,
            } => {
                write!(f, "[{provider}] Unsupported operation: {operation}")
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
