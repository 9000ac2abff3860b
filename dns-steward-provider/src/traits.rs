use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::types::{DnsRecord, DnsZone, RecordType, UpdateRecord};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code, where the API distinguishes one from the message.
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra context carried into error mapping (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name, for `RecordExists`/`RecordNotFound`.
    pub record_name: Option<String>,
    /// Zone name, for `ZoneNotFound`/`ZoneExists`.
    pub zone: Option<String>,
}

/// Client error mapping trait (internal).
///
/// Each client implements this to map its raw API errors onto [`ApiError`].
pub(crate) trait ApiErrorMapper {
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ApiError;

    fn parse_error(&self, detail: impl ToString) -> ApiError {
        ApiError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn unknown_error(&self, raw: RawApiError) -> ApiError {
        ApiError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS server management API capability.
///
/// The reconciliation layer consumes exactly this surface. The record calls
/// use the set-based shape: replacing or deleting addresses the whole
/// type+name record set, because multi-valued types have no per-record
/// identifier on the wire.
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Client identifier, used in logs and error context.
    fn id(&self) -> &'static str;

    /// Fetch all live records for `rtype` + `name` in `zone`.
    ///
    /// An empty vector is a normal answer (the set does not exist), not an
    /// error.
    async fn get_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>>;

    /// Add one record with overwrite-off semantics: a uniqueness violation
    /// fails with the server's error rather than silently merging.
    async fn add_record(&self, zone: &str, record: &DnsRecord) -> Result<()>;

    /// Replace the whole record set for `rtype` + `name` with `records`.
    async fn set_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
        records: &[UpdateRecord],
    ) -> Result<()>;

    /// Delete every record for `rtype` + `name`.
    async fn delete_records(&self, zone: &str, rtype: &RecordType, name: &str) -> Result<()>;

    /// List all zones visible to the credentials.
    async fn list_zones(&self) -> Result<Vec<DnsZone>>;

    /// Create a zone from its creation parameters.
    async fn create_zone(&self, zone: &DnsZone) -> Result<()>;

    /// Delete a zone and all its records.
    async fn delete_zone(&self, zone_name: &str) -> Result<()>;
}
