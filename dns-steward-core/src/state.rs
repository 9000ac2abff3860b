//! Desired-state record model and its mapping onto the wire model.
//!
//! [`RecordDraft`] is the flat shape a configuration block produces: one
//! optional field per possible attribute, exactly as an operator writes
//! them. [`RecordDraft::resolve`] performs the statically-typed per-field
//! mapping into a [`RecordState`], validating that each record type has the
//! fields it requires. There is no reflection and no generic field bag.

use serde::{Deserialize, Serialize};

use dns_steward_provider::{DnsRecord, RecordData, RecordType};

use crate::error::{CoreError, CoreResult};

/// Highest TTL the servers accept (one week).
pub const MAX_TTL: u32 = 604_800;
/// TTL applied when a draft does not set one.
pub const DEFAULT_TTL: u32 = 3600;

/// A fully resolved desired-state record: which zone and owner name it lives
/// at, and the typed payload it should carry.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordState {
    pub zone: String,
    /// Owner name relative to the zone, `"@"` for the apex.
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
    pub comments: Option<String>,
    pub expiry_ttl: Option<u32>,
}

impl RecordState {
    pub fn new(zone: impl Into<String>, name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
            ttl,
            data,
            comments: None,
            expiry_ttl: None,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Convert to the wire record model (drops the zone, which client calls
    /// carry separately).
    pub fn to_record(&self) -> DnsRecord {
        DnsRecord {
            name: self.name.clone(),
            ttl: self.ttl,
            data: self.data.clone(),
            comments: self.comments.clone(),
            expiry_ttl: self.expiry_ttl,
        }
    }

    /// Rebuild a state from a live wire record.
    pub fn from_record(zone: &str, record: &DnsRecord) -> Self {
        Self {
            zone: zone.to_string(),
            name: record.name.clone(),
            ttl: record.ttl,
            data: record.data.clone(),
            comments: record.comments.clone(),
            expiry_ttl: record.expiry_ttl,
        }
    }
}

/// Flat, untyped-but-declared record attributes, one optional field per
/// attribute any record type can carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RecordDraft {
    pub zone: String,
    pub name: String,
    /// Record type in wire spelling (`"A"`, `"CNAME"`, …).
    pub record_type: String,
    pub ttl: Option<u32>,
    pub comments: Option<String>,
    pub expiry_ttl: Option<u32>,

    // A / AAAA
    pub ip_address: Option<String>,

    // CNAME / ANAME / DNAME
    pub cname: Option<String>,
    pub aname: Option<String>,
    pub dname: Option<String>,

    // NS
    pub name_server: Option<String>,
    pub glue: Option<String>,

    // PTR
    pub ptr_name: Option<String>,

    // MX
    pub exchange: Option<String>,
    pub preference: Option<u16>,

    // TXT
    pub text: Option<String>,
    pub split_text: Option<bool>,

    // SRV
    pub priority: Option<u16>,
    pub weight: Option<u16>,
    pub port: Option<u16>,
    pub target: Option<String>,

    // NAPTR
    pub naptr_order: Option<u16>,
    pub naptr_preference: Option<u16>,
    pub naptr_flags: Option<String>,
    pub naptr_services: Option<String>,
    pub naptr_regexp: Option<String>,
    pub naptr_replacement: Option<String>,

    // CAA (flags kept as text in configuration, parsed on resolve)
    pub flags: Option<String>,
    pub tag: Option<String>,
    pub value: Option<String>,

    // DS
    pub key_tag: Option<u16>,
    pub algorithm: Option<String>,
    pub digest_type: Option<String>,
    pub digest: Option<String>,

    // SSHFP
    pub sshfp_algorithm: Option<String>,
    pub sshfp_fingerprint_type: Option<String>,
    pub sshfp_fingerprint: Option<String>,

    // TLSA
    pub tlsa_certificate_usage: Option<String>,
    pub tlsa_selector: Option<String>,
    pub tlsa_matching_type: Option<String>,
    pub tlsa_certificate_association_data: Option<String>,

    // SVCB / HTTPS
    pub svc_priority: Option<u16>,
    pub svc_target_name: Option<String>,
    pub svc_params: Option<String>,
    pub auto_ipv4_hint: Option<bool>,
    pub auto_ipv6_hint: Option<bool>,

    // URI
    pub uri_priority: Option<u16>,
    pub uri_weight: Option<u16>,
    pub uri: Option<String>,

    // FWD
    pub protocol: Option<String>,
    pub forwarder: Option<String>,
    pub forwarder_priority: Option<u16>,
    pub dnssec_validation: Option<bool>,
    pub proxy_type: Option<String>,
    pub proxy_address: Option<String>,
    pub proxy_port: Option<u16>,
    pub proxy_username: Option<String>,
    pub proxy_password: Option<String>,

    // APP
    pub app_name: Option<String>,
    pub class_path: Option<String>,
    pub record_data: Option<String>,
}

fn require<T>(value: Option<T>, field: &str, rtype: &RecordType) -> CoreResult<T> {
    value.ok_or_else(|| {
        CoreError::Validation(format!("'{field}' is required for {rtype} records"))
    })
}

fn require_text(value: &Option<String>, field: &str, rtype: &RecordType) -> CoreResult<String> {
    require(
        value.clone().filter(|s| !s.is_empty()),
        field,
        rtype,
    )
}

impl RecordDraft {
    /// Resolve the flat attributes into a typed [`RecordState`].
    ///
    /// Enumerates the required fields per record type and rejects drafts
    /// that miss one, with the offending field named in the error.
    pub fn resolve(&self) -> CoreResult<RecordState> {
        if self.zone.is_empty() {
            return Err(CoreError::Validation("'zone' is required".to_string()));
        }
        if self.name.is_empty() {
            return Err(CoreError::Validation("'name' is required".to_string()));
        }

        let rtype = RecordType::from(self.record_type.as_str());
        let ttl = self.ttl.unwrap_or(DEFAULT_TTL);
        if ttl > MAX_TTL {
            return Err(CoreError::Validation(format!(
                "'ttl' must be at most {MAX_TTL} seconds, got {ttl}"
            )));
        }

        let data = match &rtype {
            RecordType::A => RecordData::A {
                address: require_text(&self.ip_address, "ip_address", &rtype)?,
            },
            RecordType::AAAA => RecordData::AAAA {
                address: require_text(&self.ip_address, "ip_address", &rtype)?,
            },
            RecordType::CNAME => RecordData::CNAME {
                target: require_text(&self.cname, "cname", &rtype)?,
            },
            RecordType::ANAME => RecordData::ANAME {
                target: require_text(&self.aname, "aname", &rtype)?,
            },
            RecordType::DNAME => RecordData::DNAME {
                target: require_text(&self.dname, "dname", &rtype)?,
            },
            RecordType::NS => RecordData::NS {
                name_server: require_text(&self.name_server, "name_server", &rtype)?,
                glue: self.glue.clone(),
            },
            RecordType::PTR => RecordData::PTR {
                ptr_name: require_text(&self.ptr_name, "ptr_name", &rtype)?,
            },
            RecordType::MX => RecordData::MX {
                preference: require(self.preference, "preference", &rtype)?,
                exchange: require_text(&self.exchange, "exchange", &rtype)?,
            },
            RecordType::TXT => RecordData::TXT {
                text: require_text(&self.text, "text", &rtype)?,
                split_text: self.split_text.unwrap_or(false),
            },
            RecordType::SRV => RecordData::SRV {
                priority: require(self.priority, "priority", &rtype)?,
                weight: require(self.weight, "weight", &rtype)?,
                port: require(self.port, "port", &rtype)?,
                target: require_text(&self.target, "target", &rtype)?,
            },
            RecordType::NAPTR => RecordData::NAPTR {
                order: require(self.naptr_order, "naptr_order", &rtype)?,
                preference: require(self.naptr_preference, "naptr_preference", &rtype)?,
                flags: self.naptr_flags.clone().unwrap_or_default(),
                services: self.naptr_services.clone().unwrap_or_default(),
                regexp: self.naptr_regexp.clone().unwrap_or_default(),
                replacement: self.naptr_replacement.clone().unwrap_or_default(),
            },
            RecordType::CAA => {
                let flags_text = require_text(&self.flags, "flags", &rtype)?;
                let flags = flags_text.parse::<u8>().map_err(|_| {
                    CoreError::Validation(format!(
                        "'flags' must be an integer between 0 and 255 for CAA records, got '{flags_text}'"
                    ))
                })?;
                RecordData::CAA {
                    flags,
                    tag: require_text(&self.tag, "tag", &rtype)?,
                    value: require_text(&self.value, "value", &rtype)?,
                }
            }
            RecordType::DS => RecordData::DS {
                key_tag: require(self.key_tag, "key_tag", &rtype)?,
                algorithm: require_text(&self.algorithm, "algorithm", &rtype)?,
                digest_type: require_text(&self.digest_type, "digest_type", &rtype)?,
                digest: require_text(&self.digest, "digest", &rtype)?,
            },
            RecordType::SSHFP => RecordData::SSHFP {
                algorithm: require_text(&self.sshfp_algorithm, "sshfp_algorithm", &rtype)?,
                fingerprint_type: require_text(
                    &self.sshfp_fingerprint_type,
                    "sshfp_fingerprint_type",
                    &rtype,
                )?,
                fingerprint: require_text(&self.sshfp_fingerprint, "sshfp_fingerprint", &rtype)?,
            },
            RecordType::TLSA => RecordData::TLSA {
                certificate_usage: require_text(
                    &self.tlsa_certificate_usage,
                    "tlsa_certificate_usage",
                    &rtype,
                )?,
                selector: require_text(&self.tlsa_selector, "tlsa_selector", &rtype)?,
                matching_type: require_text(&self.tlsa_matching_type, "tlsa_matching_type", &rtype)?,
                association_data: require_text(
                    &self.tlsa_certificate_association_data,
                    "tlsa_certificate_association_data",
                    &rtype,
                )?,
            },
            RecordType::SVCB => RecordData::SVCB {
                priority: require(self.svc_priority, "svc_priority", &rtype)?,
                target_name: require_text(&self.svc_target_name, "svc_target_name", &rtype)?,
                params: self.svc_params.clone().unwrap_or_default(),
                auto_ipv4_hint: self.auto_ipv4_hint.unwrap_or(false),
                auto_ipv6_hint: self.auto_ipv6_hint.unwrap_or(false),
            },
            RecordType::HTTPS => RecordData::HTTPS {
                priority: require(self.svc_priority, "svc_priority", &rtype)?,
                target_name: require_text(&self.svc_target_name, "svc_target_name", &rtype)?,
                params: self.svc_params.clone().unwrap_or_default(),
                auto_ipv4_hint: self.auto_ipv4_hint.unwrap_or(false),
                auto_ipv6_hint: self.auto_ipv6_hint.unwrap_or(false),
            },
            RecordType::URI => RecordData::URI {
                priority: require(self.uri_priority, "uri_priority", &rtype)?,
                weight: require(self.uri_weight, "uri_weight", &rtype)?,
                uri: require_text(&self.uri, "uri", &rtype)?,
            },
            RecordType::FWD => RecordData::FWD {
                protocol: self.protocol.clone(),
                forwarder: require_text(&self.forwarder, "forwarder", &rtype)?,
                forwarder_priority: self.forwarder_priority.unwrap_or(0),
                dnssec_validation: self.dnssec_validation.unwrap_or(false),
                proxy_type: self.proxy_type.clone(),
                proxy_address: self.proxy_address.clone(),
                proxy_port: self.proxy_port,
                proxy_username: self.proxy_username.clone(),
                proxy_password: self.proxy_password.clone(),
            },
            RecordType::APP => RecordData::APP {
                app_name: require_text(&self.app_name, "app_name", &rtype)?,
                class_path: require_text(&self.class_path, "class_path", &rtype)?,
                record_data: self.record_data.clone().unwrap_or_default(),
            },
            RecordType::SOA => {
                return Err(CoreError::Validation(
                    "SOA records are managed by the server and cannot be declared".to_string(),
                ));
            }
            RecordType::Unknown(other) => {
                return Err(CoreError::Validation(format!(
                    "unsupported record type: {other}"
                )));
            }
        };

        Ok(RecordState {
            zone: self.zone.clone(),
            name: self.name.clone(),
            ttl,
            data,
            comments: self.comments.clone(),
            expiry_ttl: self.expiry_ttl,
        })
    }
}

impl RecordState {
    /// Flatten back into draft form, populating exactly the fields the
    /// record type defines.
    pub fn draft(&self) -> RecordDraft {
        let mut draft = RecordDraft {
            zone: self.zone.clone(),
            name: self.name.clone(),
            record_type: self.record_type().as_str().to_string(),
            ttl: Some(self.ttl),
            comments: self.comments.clone(),
            expiry_ttl: self.expiry_ttl,
            ..RecordDraft::default()
        };

        match &self.data {
            RecordData::A { address } | RecordData::AAAA { address } => {
                draft.ip_address = Some(address.clone());
            }
            RecordData::CNAME { target } => draft.cname = Some(target.clone()),
            RecordData::ANAME { target } => draft.aname = Some(target.clone()),
            RecordData::DNAME { target } => draft.dname = Some(target.clone()),
            RecordData::NS { name_server, glue } => {
                draft.name_server = Some(name_server.clone());
                draft.glue.clone_from(glue);
            }
            RecordData::PTR { ptr_name } => draft.ptr_name = Some(ptr_name.clone()),
            RecordData::MX {
                preference,
                exchange,
            } => {
                draft.preference = Some(*preference);
                draft.exchange = Some(exchange.clone());
            }
            RecordData::TXT { text, split_text } => {
                draft.text = Some(text.clone());
                draft.split_text = Some(*split_text);
            }
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => {
                draft.priority = Some(*priority);
                draft.weight = Some(*weight);
                draft.port = Some(*port);
                draft.target = Some(target.clone());
            }
            RecordData::NAPTR {
                order,
                preference,
                flags,
                services,
                regexp,
                replacement,
            } => {
                draft.naptr_order = Some(*order);
                draft.naptr_preference = Some(*preference);
                draft.naptr_flags = Some(flags.clone());
                draft.naptr_services = Some(services.clone());
                draft.naptr_regexp = Some(regexp.clone());
                draft.naptr_replacement = Some(replacement.clone());
            }
            RecordData::CAA { flags, tag, value } => {
                draft.flags = Some(flags.to_string());
                draft.tag = Some(tag.clone());
                draft.value = Some(value.clone());
            }
            RecordData::DS {
                key_tag,
                algorithm,
                digest_type,
                digest,
            } => {
                draft.key_tag = Some(*key_tag);
                draft.algorithm = Some(algorithm.clone());
                draft.digest_type = Some(digest_type.clone());
                draft.digest = Some(digest.clone());
            }
            RecordData::SSHFP {
                algorithm,
                fingerprint_type,
                fingerprint,
            } => {
                draft.sshfp_algorithm = Some(algorithm.clone());
                draft.sshfp_fingerprint_type = Some(fingerprint_type.clone());
                draft.sshfp_fingerprint = Some(fingerprint.clone());
            }
            RecordData::TLSA {
                certificate_usage,
                selector,
                matching_type,
                association_data,
            } => {
                draft.tlsa_certificate_usage = Some(certificate_usage.clone());
                draft.tlsa_selector = Some(selector.clone());
                draft.tlsa_matching_type = Some(matching_type.clone());
                draft.tlsa_certificate_association_data = Some(association_data.clone());
            }
            RecordData::SVCB {
                priority,
                target_name,
                params,
                auto_ipv4_hint,
                auto_ipv6_hint,
            }
            | RecordData::HTTPS {
                priority,
                target_name,
                params,
                auto_ipv4_hint,
                auto_ipv6_hint,
            } => {
                draft.svc_priority = Some(*priority);
                draft.svc_target_name = Some(target_name.clone());
                draft.svc_params = Some(params.clone());
                draft.auto_ipv4_hint = Some(*auto_ipv4_hint);
                draft.auto_ipv6_hint = Some(*auto_ipv6_hint);
            }
            RecordData::URI {
                priority,
                weight,
                uri,
            } => {
                draft.uri_priority = Some(*priority);
                draft.uri_weight = Some(*weight);
                draft.uri = Some(uri.clone());
            }
            RecordData::FWD {
                protocol,
                forwarder,
                forwarder_priority,
                dnssec_validation,
                proxy_type,
                proxy_address,
                proxy_port,
                proxy_username,
                proxy_password,
            } => {
                draft.protocol.clone_from(protocol);
                draft.forwarder = Some(forwarder.clone());
                draft.forwarder_priority = Some(*forwarder_priority);
                draft.dnssec_validation = Some(*dnssec_validation);
                draft.proxy_type.clone_from(proxy_type);
                draft.proxy_address.clone_from(proxy_address);
                draft.proxy_port = *proxy_port;
                draft.proxy_username.clone_from(proxy_username);
                draft.proxy_password.clone_from(proxy_password);
            }
            RecordData::APP {
                app_name,
                class_path,
                record_data,
            } => {
                draft.app_name = Some(app_name.clone());
                draft.class_path = Some(class_path.clone());
                draft.record_data = Some(record_data.clone());
            }
            RecordData::SOA { .. } | RecordData::Unknown { .. } => {}
        }

        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_a_record() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "host".to_string(),
            record_type: "A".to_string(),
            ip_address: Some("1.2.3.4".to_string()),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(state) = res else {
            return;
        };
        assert_eq!(state.zone, "example.com");
        assert_eq!(state.name, "host");
        assert_eq!(state.ttl, DEFAULT_TTL);
        assert_eq!(state.data, RecordData::A {
            address: "1.2.3.4".to_string()
        });
    }

    #[test]
    fn resolve_mx_record() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "@".to_string(),
            record_type: "MX".to_string(),
            ttl: Some(600),
            exchange: Some("mail.example.com".to_string()),
            preference: Some(10),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(state) = res else {
            return;
        };
        assert_eq!(state.ttl, 600);
        assert_eq!(state.data, RecordData::MX {
            preference: 10,
            exchange: "mail.example.com".to_string()
        });
    }

    #[test]
    fn resolve_mx_without_preference_fails() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "@".to_string(),
            record_type: "MX".to_string(),
            exchange: Some("mail.example.com".to_string()),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(
            matches!(&res, Err(CoreError::Validation(msg)) if msg.contains("preference")),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn resolve_srv_record() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "_svc._tcp".to_string(),
            record_type: "SRV".to_string(),
            priority: Some(10),
            weight: Some(20),
            port: Some(443),
            target: Some("svc.example.com".to_string()),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(state) = res else {
            return;
        };
        assert_eq!(state.data, RecordData::SRV {
            priority: 10,
            weight: 20,
            port: 443,
            target: "svc.example.com".to_string()
        });
    }

    #[test]
    fn resolve_caa_parses_flags() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "@".to_string(),
            record_type: "CAA".to_string(),
            flags: Some("0".to_string()),
            tag: Some("issue".to_string()),
            value: Some("letsencrypt.org".to_string()),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(state) = res else {
            return;
        };
        assert_eq!(state.data, RecordData::CAA {
            flags: 0,
            tag: "issue".to_string(),
            value: "letsencrypt.org".to_string()
        });
    }

    #[test]
    fn resolve_caa_rejects_non_numeric_flags() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "@".to_string(),
            record_type: "CAA".to_string(),
            flags: Some("many".to_string()),
            tag: Some("issue".to_string()),
            value: Some("letsencrypt.org".to_string()),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(
            matches!(&res, Err(CoreError::Validation(msg)) if msg.contains("flags")),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn resolve_rejects_oversized_ttl() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "host".to_string(),
            record_type: "A".to_string(),
            ttl: Some(MAX_TTL + 1),
            ip_address: Some("1.2.3.4".to_string()),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(
            matches!(&res, Err(CoreError::Validation(msg)) if msg.contains("ttl")),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn resolve_rejects_unknown_type() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "host".to_string(),
            record_type: "BOGUS".to_string(),
            ..RecordDraft::default()
        };
        let res = draft.resolve();
        assert!(
            matches!(&res, Err(CoreError::Validation(msg)) if msg.contains("BOGUS")),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn resolve_rejects_soa() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "@".to_string(),
            record_type: "SOA".to_string(),
            ..RecordDraft::default()
        };
        assert!(draft.resolve().is_err());
    }

    #[test]
    fn resolve_rejects_empty_required_text() {
        let draft = RecordDraft {
            zone: "example.com".to_string(),
            name: "host".to_string(),
            record_type: "A".to_string(),
            ip_address: Some(String::new()),
            ..RecordDraft::default()
        };
        assert!(draft.resolve().is_err());
    }

    #[test]
    fn draft_roundtrip_txt() {
        let state = RecordState::new("example.com", "@", 1200, RecordData::TXT {
            text: "hello world".to_string(),
            split_text: true,
        });
        let draft = state.draft();
        assert_eq!(draft.record_type, "TXT");
        assert_eq!(draft.text.as_deref(), Some("hello world"));
        assert_eq!(draft.split_text, Some(true));

        let res = draft.resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(back) = res else {
            return;
        };
        assert_eq!(back, state);
    }

    #[test]
    fn draft_roundtrip_srv() {
        let state = RecordState::new("example.com", "_svc._tcp", 600, RecordData::SRV {
            priority: 10,
            weight: 20,
            port: 443,
            target: "svc.example.com".to_string(),
        });
        let res = state.draft().resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(back) = res else {
            return;
        };
        assert_eq!(back, state);
    }

    #[test]
    fn draft_roundtrip_caa() {
        let state = RecordState::new("example.com", "@", 3600, RecordData::CAA {
            flags: 128,
            tag: "iodef".to_string(),
            value: "mailto:ops@example.com".to_string(),
        });
        let res = state.draft().resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(back) = res else {
            return;
        };
        assert_eq!(back, state);
    }

    #[test]
    fn draft_deserializes_from_config_json() {
        let json = r#"{
            "zone": "example.com",
            "name": "www",
            "record_type": "A",
            "ttl": 600,
            "ip_address": "1.2.3.4"
        }"#;
        let parsed: Result<RecordDraft, _> = serde_json::from_str(json);
        assert!(parsed.is_ok(), "parse failed: {parsed:?}");
        let Ok(draft) = parsed else {
            return;
        };
        let res = draft.resolve();
        assert!(res.is_ok(), "resolve failed: {res:?}");
        let Ok(state) = res else {
            return;
        };
        assert_eq!(state.ttl, 600);
        assert_eq!(state.data, RecordData::A {
            address: "1.2.3.4".to_string()
        });
    }

    #[test]
    fn to_record_and_back() {
        let state = RecordState::new("example.com", "www", 3600, RecordData::A {
            address: "1.2.3.4".to_string(),
        });
        let record = state.to_record();
        assert_eq!(record.name, "www");
        assert_eq!(RecordState::from_record("example.com", &record), state);
    }
}
