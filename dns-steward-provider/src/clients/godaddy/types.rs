//! GoDaddy API wire types and record mapping.
//!
//! The API uses one flat record shape for every type; the first four fields
//! are always present, the rest only for MX (priority) and SRV.

use serde::{Deserialize, Serialize};

use crate::types::{DnsRecord, RecordData, RecordType, UpdateRecord};

/// Flat wire record, good for GET and PATCH (add); PUT (replace) omits
/// `type` and `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GodaddyRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: String,
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
}

/// Error payload, e.g. `{ "code": "INVALID_VALUE_ENUM", "message": "…" }`.
#[derive(Debug, Deserialize)]
pub struct GodaddyErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A registered domain from `GET /v1/domains`.
#[derive(Debug, Deserialize)]
pub struct GodaddyDomain {
    pub domain: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// SRV owner names carry service and protocol as their first two labels
/// (`"_ldap._tcp"` or `"_ldap._tcp.sub"`).
fn split_srv_name(name: &str) -> (Option<String>, Option<String>) {
    let mut labels = name.splitn(3, '.');
    let service = labels.next().filter(|l| l.starts_with('_'));
    let protocol = labels.next().filter(|l| l.starts_with('_'));
    (service.map(String::from), protocol.map(String::from))
}

/// Map typed record data onto the flat wire shape shared by add and replace.
///
/// Returns `Err` with the type name for types this API does not serve.
fn flat_fields(name: &str, data: &RecordData) -> Result<GodaddyRecord, String> {
    let mut wire = GodaddyRecord {
        record_type: None,
        name: None,
        data: String::new(),
        ttl: 0,
        priority: None,
        service: None,
        protocol: None,
        port: None,
        weight: None,
    };

    match data {
        RecordData::A { address } | RecordData::AAAA { address } => {
            wire.data.clone_from(address);
        }
        RecordData::CNAME { target } => wire.data.clone_from(target),
        RecordData::MX {
            preference,
            exchange,
        } => {
            wire.data.clone_from(exchange);
            wire.priority = Some(*preference);
        }
        RecordData::NS { name_server, .. } => wire.data.clone_from(name_server),
        RecordData::TXT { text, .. } => wire.data.clone_from(text),
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => {
            wire.data.clone_from(target);
            wire.priority = Some(*priority);
            wire.weight = Some(*weight);
            wire.port = Some(*port);
            let (service, protocol) = split_srv_name(name);
            wire.service = service;
            wire.protocol = protocol;
        }
        RecordData::CAA { flags, tag, value } => {
            wire.data = format!("{flags} {tag} {value}");
        }
        other => return Err(other.record_type().to_string()),
    }

    Ok(wire)
}

/// Encode a full record for `PATCH …/records` (add).
pub(crate) fn encode_record(record: &DnsRecord) -> Result<GodaddyRecord, String> {
    let mut wire = flat_fields(&record.name, &record.data)?;
    wire.record_type = Some(record.record_type().as_str().to_string());
    wire.name = Some(record.name.clone());
    wire.ttl = record.ttl;
    Ok(wire)
}

/// Encode a reduced record for `PUT …/records/{type}/{name}` (replace-set).
pub(crate) fn encode_update(name: &str, update: &UpdateRecord) -> Result<GodaddyRecord, String> {
    let mut wire = flat_fields(name, &update.data)?;
    wire.ttl = update.ttl;
    Ok(wire)
}

impl GodaddyRecord {
    /// Decode the flat wire shape into the typed model.
    ///
    /// `fallback_name` supplies the owner name for replies that omit it.
    pub(crate) fn into_record(self, fallback_name: &str) -> DnsRecord {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| fallback_name.to_string());
        let rtype = RecordType::from(self.record_type.as_deref().unwrap_or(""));

        let data = match rtype {
            RecordType::A => RecordData::A { address: self.data },
            RecordType::AAAA => RecordData::AAAA { address: self.data },
            RecordType::CNAME => RecordData::CNAME { target: self.data },
            RecordType::MX => RecordData::MX {
                preference: self.priority.unwrap_or(0),
                exchange: self.data,
            },
            RecordType::NS => RecordData::NS {
                name_server: self.data,
                glue: None,
            },
            RecordType::TXT => RecordData::TXT {
                text: self.data,
                split_text: false,
            },
            RecordType::SRV => RecordData::SRV {
                priority: self.priority.unwrap_or(0),
                weight: self.weight.unwrap_or(0),
                port: self.port.unwrap_or(0),
                target: self.data,
            },
            RecordType::CAA => {
                // data is "<flags> <tag> <value>", value may contain spaces
                let mut parts = self.data.splitn(3, ' ');
                let flags = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
                let tag = parts.next().unwrap_or("").to_string();
                let value = parts.next().unwrap_or("").to_string();
                RecordData::CAA { flags, tag, value }
            }
            other => RecordData::Unknown {
                rtype: other.as_str().to_string(),
                rdata: self.data,
            },
        };

        DnsRecord::new(name, self.ttl, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_a_record() {
        let record = DnsRecord::new("www", 3600, RecordData::A {
            address: "1.2.3.4".to_string(),
        });
        let res = encode_record(&record);
        assert!(res.is_ok(), "encode failed: {res:?}");
        let Ok(wire) = res else {
            return;
        };
        assert_eq!(wire.record_type.as_deref(), Some("A"));
        assert_eq!(wire.name.as_deref(), Some("www"));
        assert_eq!(wire.data, "1.2.3.4");
        assert_eq!(wire.ttl, 3600);
        assert!(wire.priority.is_none());
    }

    #[test]
    fn encode_mx_carries_priority() {
        let record = DnsRecord::new("@", 3600, RecordData::MX {
            preference: 10,
            exchange: "mail.example.com".to_string(),
        });
        let res = encode_record(&record);
        assert!(res.is_ok(), "encode failed: {res:?}");
        let Ok(wire) = res else {
            return;
        };
        assert_eq!(wire.data, "mail.example.com");
        assert_eq!(wire.priority, Some(10));
    }

    #[test]
    fn encode_srv_splits_service_and_protocol_from_name() {
        let record = DnsRecord::new("_ldap._tcp", 600, RecordData::SRV {
            priority: 10,
            weight: 20,
            port: 389,
            target: "ldap.example.com".to_string(),
        });
        let res = encode_record(&record);
        assert!(res.is_ok(), "encode failed: {res:?}");
        let Ok(wire) = res else {
            return;
        };
        assert_eq!(wire.service.as_deref(), Some("_ldap"));
        assert_eq!(wire.protocol.as_deref(), Some("_tcp"));
        assert_eq!(wire.port, Some(389));
        assert_eq!(wire.weight, Some(20));
    }

    #[test]
    fn encode_caa_flattens_to_data_string() {
        let record = DnsRecord::new("@", 3600, RecordData::CAA {
            flags: 0,
            tag: "issue".to_string(),
            value: "letsencrypt.org".to_string(),
        });
        let res = encode_record(&record);
        assert!(res.is_ok(), "encode failed: {res:?}");
        let Ok(wire) = res else {
            return;
        };
        assert_eq!(wire.data, "0 issue letsencrypt.org");
    }

    #[test]
    fn encode_unsupported_type_rejected() {
        let record = DnsRecord::new("@", 3600, RecordData::FWD {
            protocol: None,
            forwarder: "8.8.8.8".to_string(),
            forwarder_priority: 0,
            dnssec_validation: false,
            proxy_type: None,
            proxy_address: None,
            proxy_port: None,
            proxy_username: None,
            proxy_password: None,
        });
        let res = encode_record(&record);
        assert!(matches!(res, Err(ref t) if t == "FWD"), "unexpected: {res:?}");
    }

    #[test]
    fn encode_update_omits_type_and_name() {
        let update = UpdateRecord {
            ttl: 3600,
            data: RecordData::MX {
                preference: 10,
                exchange: "mx1.test.com".to_string(),
            },
        };
        let res = encode_update("@", &update);
        assert!(res.is_ok(), "encode failed: {res:?}");
        let Ok(wire) = res else {
            return;
        };
        assert!(wire.record_type.is_none());
        assert!(wire.name.is_none());
        assert_eq!(wire.data, "mx1.test.com");
        assert_eq!(wire.priority, Some(10));
    }

    #[test]
    fn decode_cname_reply() {
        let wire = GodaddyRecord {
            record_type: Some("CNAME".to_string()),
            name: Some("cn".to_string()),
            data: "something.other.com".to_string(),
            ttl: 3600,
            priority: None,
            service: None,
            protocol: None,
            port: None,
            weight: None,
        };
        let record = wire.into_record("cn");
        assert_eq!(record.name, "cn");
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.data, RecordData::CNAME {
            target: "something.other.com".to_string()
        });
    }

    #[test]
    fn decode_caa_data_with_spaces_in_value() {
        let wire = GodaddyRecord {
            record_type: Some("CAA".to_string()),
            name: Some("@".to_string()),
            data: "128 iodef mailto:ops@example.com extra".to_string(),
            ttl: 3600,
            priority: None,
            service: None,
            protocol: None,
            port: None,
            weight: None,
        };
        let record = wire.into_record("@");
        assert_eq!(record.data, RecordData::CAA {
            flags: 128,
            tag: "iodef".to_string(),
            value: "mailto:ops@example.com extra".to_string(),
        });
    }

    #[test]
    fn wire_roundtrip_through_json() {
        let json = r#"[{"data":"something.other.com","name":"cn","ttl":3600,"type":"CNAME"}]"#;
        let parsed: Result<Vec<GodaddyRecord>, _> = serde_json::from_str(json);
        assert!(parsed.is_ok(), "parse failed: {parsed:?}");
        let Ok(records) = parsed else {
            return;
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data, "something.other.com");
    }

    #[test]
    fn update_serializes_without_null_fields() {
        let update = UpdateRecord {
            ttl: 3600,
            data: RecordData::A {
                address: "1.2.3.4".to_string(),
            },
        };
        let wire = encode_update("www", &update).unwrap_or(GodaddyRecord {
            record_type: None,
            name: None,
            data: String::new(),
            ttl: 0,
            priority: None,
            service: None,
            protocol: None,
            port: None,
            weight: None,
        });
        let json_res = serde_json::to_string(&wire);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, r#"{"data":"1.2.3.4","ttl":3600}"#);
    }
}
