//! GoDaddy `DnsApiClient` implementation.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ApiError, Result};
use crate::traits::{ApiErrorMapper, DnsApiClient, ErrorContext};
use crate::types::{DnsRecord, DnsZone, RecordType, UpdateRecord};

use super::types::{GodaddyDomain, encode_record, encode_update};
use super::{DOMAINS_PATH, GodaddyClient, GodaddyRecord};

impl GodaddyClient {
    fn record_context(&self, zone: &str, name: &str) -> ErrorContext {
        ErrorContext {
            record_name: Some(name.to_string()),
            zone: Some(zone.to_string()),
        }
    }

    fn unsupported_type(&self, record_type: String) -> ApiError {
        ApiError::UnsupportedRecordType {
            provider: self.provider_name().to_string(),
            record_type,
        }
    }

    fn unsupported_operation(&self, operation: &str) -> ApiError {
        ApiError::UnsupportedOperation {
            provider: self.provider_name().to_string(),
            operation: operation.to_string(),
        }
    }

    fn records_path(&self, zone: &str, rtype: &RecordType, name: &str) -> String {
        format!(
            "{DOMAINS_PATH}/{zone}/records/{}/{}",
            urlencoding::encode(rtype.as_str()),
            urlencoding::encode(name)
        )
    }
}

#[async_trait]
impl DnsApiClient for GodaddyClient {
    fn id(&self) -> &'static str {
        "godaddy"
    }

    async fn get_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>> {
        let path = self.records_path(zone, rtype, name);
        let wire: Vec<GodaddyRecord> = self
            .get_json(&path, self.record_context(zone, name))
            .await?;
        Ok(wire.into_iter().map(|r| r.into_record(name)).collect())
    }

    async fn add_record(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        // PATCH adds to the existing set; duplicates are the server's error
        let body = vec![
            encode_record(record).map_err(|t| self.unsupported_type(t))?,
        ];
        let path = format!("{DOMAINS_PATH}/{zone}/records");
        self.send(
            Method::PATCH,
            &path,
            &body,
            self.record_context(zone, &record.name),
        )
        .await
    }

    async fn set_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
        records: &[UpdateRecord],
    ) -> Result<()> {
        let body: Vec<GodaddyRecord> = records
            .iter()
            .map(|u| encode_update(name, u).map_err(|t| self.unsupported_type(t)))
            .collect::<Result<_>>()?;
        let path = self.records_path(zone, rtype, name);
        self.send(Method::PUT, &path, &body, self.record_context(zone, name))
            .await
    }

    async fn delete_records(&self, zone: &str, rtype: &RecordType, name: &str) -> Result<()> {
        let path = self.records_path(zone, rtype, name);
        self.send_empty(Method::DELETE, &path, self.record_context(zone, name))
            .await
    }

    async fn list_zones(&self) -> Result<Vec<DnsZone>> {
        let domains: Vec<GodaddyDomain> = self
            .get_json(DOMAINS_PATH, ErrorContext::default())
            .await?;
        Ok(domains
            .into_iter()
            .map(|d| {
                let mut zone = DnsZone {
                    name: d.domain,
                    ..DnsZone::default()
                };
                zone.disabled = d.status.as_deref().is_some_and(|s| s != "ACTIVE");
                zone
            })
            .collect())
    }

    async fn create_zone(&self, _zone: &DnsZone) -> Result<()> {
        // registered domains are the zone universe here; there is nothing to create
        Err(self.unsupported_operation("create_zone"))
    }

    async fn delete_zone(&self, _zone_name: &str) -> Result<()> {
        Err(self.unsupported_operation("delete_zone"))
    }
}
