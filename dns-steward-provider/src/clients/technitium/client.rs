//! Technitium `DnsApiClient` implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::common::{full_name_to_relative, relative_to_full_name};
use crate::error::{ApiError, Result};
use crate::traits::{ApiErrorMapper, DnsApiClient, ErrorContext};
use crate::types::{DnsRecord, DnsZone, RecordType, UpdateRecord};

use super::types::{key_params, rdata_params};
use super::{TechnitiumClient, ZoneListResponse, ZoneRecordsResponse};

impl TechnitiumClient {
    fn record_context(&self, zone: &str, name: &str) -> ErrorContext {
        ErrorContext {
            record_name: Some(name.to_string()),
            zone: Some(zone.to_string()),
        }
    }

    fn zone_context(&self, zone: &str) -> ErrorContext {
        ErrorContext {
            record_name: None,
            zone: Some(zone.to_string()),
        }
    }

    fn unsupported_type(&self, detail: String) -> ApiError {
        ApiError::UnsupportedRecordType {
            provider: self.provider_name().to_string(),
            record_type: detail,
        }
    }

    /// Delete one concrete record, addressed by its identity-key parameters.
    async fn delete_one(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        let fqdn = relative_to_full_name(&record.name, zone);
        let mut params = vec![
            ("domain", fqdn),
            ("zone", zone.to_string()),
            ("type", record.record_type().as_str().to_string()),
        ];
        params.extend(key_params(&record.data).map_err(|e| self.unsupported_type(e))?);

        let _: Option<Value> = self
            .call_api(
                "zones/records/delete",
                &params,
                self.record_context(zone, &record.name),
            )
            .await?;
        Ok(())
    }

    /// Add one concrete record via `zones/records/add`.
    async fn add_one(&self, zone: &str, record: &DnsRecord, overwrite: bool) -> Result<()> {
        let fqdn = relative_to_full_name(&record.name, zone);
        let mut params = vec![
            ("domain", fqdn),
            ("zone", zone.to_string()),
            ("type", record.record_type().as_str().to_string()),
            ("ttl", record.ttl.to_string()),
            ("overwrite", overwrite.to_string()),
        ];
        if let Some(comments) = &record.comments {
            params.push(("comments", comments.clone()));
        }
        if let Some(expiry_ttl) = record.expiry_ttl {
            params.push(("expiryTtl", expiry_ttl.to_string()));
        }
        params.extend(rdata_params(&record.data).map_err(|e| self.unsupported_type(e))?);

        let _: Option<Value> = self
            .call_api(
                "zones/records/add",
                &params,
                self.record_context(zone, &record.name),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DnsApiClient for TechnitiumClient {
    fn id(&self) -> &'static str {
        "technitium"
    }

    async fn get_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>> {
        let fqdn = relative_to_full_name(name, zone);
        let params = [
            ("domain", fqdn),
            ("zone", zone.to_string()),
            ("listZone", "false".to_string()),
        ];
        let response: ZoneRecordsResponse = self
            .call_api_expect(
                "zones/records/get",
                &params,
                self.record_context(zone, name),
            )
            .await?;

        // the endpoint returns every record at the owner name; narrow to the
        // requested type and translate owner names to zone-relative form
        let mut records = Vec::new();
        for wire in response.records {
            let mut record = wire
                .into_record()
                .map_err(|e| self.parse_error(e))?;
            record.name = full_name_to_relative(&record.name, zone);
            if record.record_type() == *rtype && record.name == name {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn add_record(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        // overwrite stays off: a duplicate is the server's error to raise
        self.add_one(zone, record, false).await
    }

    async fn set_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
        records: &[UpdateRecord],
    ) -> Result<()> {
        // no whole-set replace on this API; bridge with a delete/add diff
        let live = self.get_records(zone, rtype, name).await?;

        for record in &live {
            if !records.contains(&record.to_update()) {
                self.delete_one(zone, record).await?;
            }
        }

        for update in records {
            if !live.iter().any(|r| r.to_update() == *update) {
                let record = DnsRecord::new(name, update.ttl, update.data.clone());
                self.add_one(zone, &record, false).await?;
            }
        }

        Ok(())
    }

    async fn delete_records(&self, zone: &str, rtype: &RecordType, name: &str) -> Result<()> {
        let live = self.get_records(zone, rtype, name).await?;
        for record in &live {
            self.delete_one(zone, record).await?;
        }
        Ok(())
    }

    async fn list_zones(&self) -> Result<Vec<DnsZone>> {
        let response: ZoneListResponse = self
            .call_api_expect("zones/list", &[], ErrorContext::default())
            .await?;
        Ok(response.zones)
    }

    async fn create_zone(&self, zone: &DnsZone) -> Result<()> {
        let zone_type = zone
            .zone_type
            .as_ref()
            .ok_or_else(|| ApiError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "type".to_string(),
                detail: "zone type is required to create a zone".to_string(),
            })?;

        let mut params = vec![
            ("zone", zone.name.clone()),
            ("type", zone_type.as_str().to_string()),
        ];
        if let Some(v) = &zone.catalog {
            params.push(("catalog", v.clone()));
        }
        if let Some(v) = zone.use_soa_serial_date_scheme {
            params.push(("useSoaSerialDateScheme", v.to_string()));
        }
        if let Some(v) = &zone.primary_name_server_addresses {
            params.push(("primaryNameServerAddresses", v.clone()));
        }
        if let Some(v) = &zone.zone_transfer_protocol {
            params.push(("zoneTransferProtocol", v.clone()));
        }
        if let Some(v) = &zone.tsig_key_name {
            params.push(("tsigKeyName", v.clone()));
        }
        if let Some(v) = zone.validate_zone {
            params.push(("validateZone", v.to_string()));
        }
        if let Some(v) = zone.initialize_forwarder {
            params.push(("initializeForwarder", v.to_string()));
        }
        if let Some(v) = &zone.protocol {
            params.push(("protocol", v.clone()));
        }
        if let Some(v) = &zone.forwarder {
            params.push(("forwarder", v.clone()));
        }
        if let Some(v) = zone.dnssec_validation {
            params.push(("dnssecValidation", v.to_string()));
        }
        if let Some(v) = &zone.proxy_type {
            params.push(("proxyType", v.clone()));
        }
        if let Some(v) = &zone.proxy_address {
            params.push(("proxyAddress", v.clone()));
        }
        if let Some(v) = zone.proxy_port {
            params.push(("proxyPort", v.to_string()));
        }
        if let Some(v) = &zone.proxy_username {
            params.push(("proxyUsername", v.clone()));
        }
        if let Some(v) = &zone.proxy_password {
            params.push(("proxyPassword", v.clone()));
        }

        let _: Option<Value> = self
            .call_api("zones/create", &params, self.zone_context(&zone.name))
            .await?;
        Ok(())
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<()> {
        let params = [("zone", zone_name.to_string())];
        let _: Option<Value> = self
            .call_api("zones/delete", &params, self.zone_context(zone_name))
            .await?;
        Ok(())
    }
}
