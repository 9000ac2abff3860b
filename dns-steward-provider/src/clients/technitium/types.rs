//! Technitium API wire types and record field mapping.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{DnsRecord, DnsZone, RecordData, RecordType};

/// Common response envelope.
///
/// `status` is `"ok"`, `"error"` or `"invalid-token"`; on error the
/// `errorMessage` field carries the server's diagnostic.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TechnitiumEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub response: Option<T>,
}

/// `zones/list` response payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneListResponse {
    #[serde(default)]
    pub zones: Vec<DnsZone>,
}

/// `zones/records/get` response payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecordsResponse {
    #[serde(default)]
    pub records: Vec<TechnitiumRecord>,
}

/// A record as the API reports it: FQDN owner name plus a per-type `rData`
/// object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnitiumRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub expiry_ttl: Option<u32>,
    #[serde(default)]
    pub r_data: Value,
}

// ---- rData decoding ----

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressData {
    ip_address: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CnameData {
    cname: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MxData {
    preference: u16,
    exchange: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NsData {
    name_server: String,
    #[serde(default)]
    glue: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TxtData {
    text: String,
    #[serde(default)]
    split_text: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SrvData {
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PtrData {
    ptr_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NaptrData {
    order: u16,
    preference: u16,
    #[serde(default)]
    flags: String,
    #[serde(default)]
    services: String,
    #[serde(default)]
    regexp: String,
    #[serde(default)]
    replacement: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaaData {
    flags: u8,
    tag: String,
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnameData {
    aname: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UriData {
    uri_priority: u16,
    uri_weight: u16,
    uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TlsaData {
    tlsa_certificate_usage: String,
    tlsa_selector: String,
    tlsa_matching_type: String,
    tlsa_certificate_association_data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SoaData {
    primary_name_server: String,
    responsible_person: String,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DnameData {
    dname: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DsData {
    key_tag: u16,
    algorithm: String,
    digest_type: String,
    digest: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SshfpData {
    sshfp_algorithm: String,
    sshfp_fingerprint_type: String,
    sshfp_fingerprint: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SvcbData {
    svc_priority: u16,
    svc_target_name: String,
    #[serde(default)]
    svc_params: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FwdData {
    #[serde(default)]
    protocol: Option<String>,
    forwarder: String,
    #[serde(default)]
    forwarder_priority: u16,
    #[serde(default)]
    dnssec_validation: bool,
    #[serde(default)]
    proxy_type: Option<String>,
    #[serde(default)]
    proxy_address: Option<String>,
    #[serde(default)]
    proxy_port: Option<u16>,
    #[serde(default)]
    proxy_username: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppData {
    app_name: String,
    class_path: String,
    #[serde(default)]
    data: String,
}

/// Render an `svcParams` object to the pipe-separated form the add API
/// accepts (`"alpn|h2,h3|port|443"`). Strings pass through.
fn svc_params_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let mut parts = Vec::with_capacity(map.len() * 2);
            for (k, v) in map {
                parts.push(k.clone());
                parts.push(match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                });
            }
            parts.join("|")
        }
        _ => String::new(),
    }
}

fn decode<'a, T: Deserialize<'a>>(rdata: &'a Value, rtype: &str) -> Result<T, String> {
    T::deserialize(rdata).map_err(|e| format!("cannot decode {rtype} rData: {e}"))
}

impl TechnitiumRecord {
    /// Decode this wire record into the typed model. The owner name is kept
    /// fully qualified; the caller converts it to zone-relative form.
    pub fn into_record(self) -> Result<DnsRecord, String> {
        let rtype = RecordType::from(self.record_type.as_str());
        let data = match rtype {
            RecordType::A => {
                let d: AddressData = decode(&self.r_data, "A")?;
                RecordData::A { address: d.ip_address }
            }
            RecordType::AAAA => {
                let d: AddressData = decode(&self.r_data, "AAAA")?;
                RecordData::AAAA { address: d.ip_address }
            }
            RecordType::CNAME => {
                let d: CnameData = decode(&self.r_data, "CNAME")?;
                RecordData::CNAME { target: d.cname }
            }
            RecordType::MX => {
                let d: MxData = decode(&self.r_data, "MX")?;
                RecordData::MX {
                    preference: d.preference,
                    exchange: d.exchange,
                }
            }
            RecordType::NS => {
                let d: NsData = decode(&self.r_data, "NS")?;
                RecordData::NS {
                    name_server: d.name_server,
                    glue: d.glue,
                }
            }
            RecordType::TXT => {
                let d: TxtData = decode(&self.r_data, "TXT")?;
                RecordData::TXT {
                    text: d.text,
                    split_text: d.split_text,
                }
            }
            RecordType::SRV => {
                let d: SrvData = decode(&self.r_data, "SRV")?;
                RecordData::SRV {
                    priority: d.priority,
                    weight: d.weight,
                    port: d.port,
                    target: d.target,
                }
            }
            RecordType::PTR => {
                let d: PtrData = decode(&self.r_data, "PTR")?;
                RecordData::PTR { ptr_name: d.ptr_name }
            }
            RecordType::NAPTR => {
                let d: NaptrData = decode(&self.r_data, "NAPTR")?;
                RecordData::NAPTR {
                    order: d.order,
                    preference: d.preference,
                    flags: d.flags,
                    services: d.services,
                    regexp: d.regexp,
                    replacement: d.replacement,
                }
            }
            RecordType::CAA => {
                let d: CaaData = decode(&self.r_data, "CAA")?;
                RecordData::CAA {
                    flags: d.flags,
                    tag: d.tag,
                    value: d.value,
                }
            }
            RecordType::ANAME => {
                let d: AnameData = decode(&self.r_data, "ANAME")?;
                RecordData::ANAME { target: d.aname }
            }
            RecordType::URI => {
                let d: UriData = decode(&self.r_data, "URI")?;
                RecordData::URI {
                    priority: d.uri_priority,
                    weight: d.uri_weight,
                    uri: d.uri,
                }
            }
            RecordType::TLSA => {
                let d: TlsaData = decode(&self.r_data, "TLSA")?;
                RecordData::TLSA {
                    certificate_usage: d.tlsa_certificate_usage,
                    selector: d.tlsa_selector,
                    matching_type: d.tlsa_matching_type,
                    association_data: d.tlsa_certificate_association_data,
                }
            }
            RecordType::SOA => {
                let d: SoaData = decode(&self.r_data, "SOA")?;
                RecordData::SOA {
                    primary_name_server: d.primary_name_server,
                    responsible_person: d.responsible_person,
                    serial: d.serial,
                    refresh: d.refresh,
                    retry: d.retry,
                    expire: d.expire,
                    minimum: d.minimum,
                }
            }
            RecordType::DNAME => {
                let d: DnameData = decode(&self.r_data, "DNAME")?;
                RecordData::DNAME { target: d.dname }
            }
            RecordType::DS => {
                let d: DsData = decode(&self.r_data, "DS")?;
                RecordData::DS {
                    key_tag: d.key_tag,
                    algorithm: d.algorithm,
                    digest_type: d.digest_type,
                    digest: d.digest,
                }
            }
            RecordType::SSHFP => {
                let d: SshfpData = decode(&self.r_data, "SSHFP")?;
                RecordData::SSHFP {
                    algorithm: d.sshfp_algorithm,
                    fingerprint_type: d.sshfp_fingerprint_type,
                    fingerprint: d.sshfp_fingerprint,
                }
            }
            RecordType::SVCB | RecordType::HTTPS => {
                let d: SvcbData = decode(&self.r_data, "SVCB/HTTPS")?;
                let params = svc_params_to_string(&d.svc_params);
                if matches!(rtype, RecordType::SVCB) {
                    RecordData::SVCB {
                        priority: d.svc_priority,
                        target_name: d.svc_target_name,
                        params,
                        auto_ipv4_hint: false,
                        auto_ipv6_hint: false,
                    }
                } else {
                    RecordData::HTTPS {
                        priority: d.svc_priority,
                        target_name: d.svc_target_name,
                        params,
                        auto_ipv4_hint: false,
                        auto_ipv6_hint: false,
                    }
                }
            }
            RecordType::FWD => {
                let d: FwdData = decode(&self.r_data, "FWD")?;
                RecordData::FWD {
                    protocol: d.protocol,
                    forwarder: d.forwarder,
                    forwarder_priority: d.forwarder_priority,
                    dnssec_validation: d.dnssec_validation,
                    proxy_type: d.proxy_type,
                    proxy_address: d.proxy_address,
                    proxy_port: d.proxy_port,
                    proxy_username: d.proxy_username,
                    proxy_password: None,
                }
            }
            RecordType::APP => {
                let d: AppData = decode(&self.r_data, "APP")?;
                RecordData::APP {
                    app_name: d.app_name,
                    class_path: d.class_path,
                    record_data: d.data,
                }
            }
            RecordType::Unknown(rtype) => RecordData::Unknown {
                rtype,
                rdata: self.r_data.to_string(),
            },
        };

        Ok(DnsRecord {
            name: self.name,
            ttl: self.ttl,
            data,
            comments: self.comments.filter(|c| !c.is_empty()),
            expiry_ttl: self.expiry_ttl.filter(|t| *t != 0),
        })
    }
}

// ---- Query parameter mapping ----

/// The full per-type parameter list for `zones/records/add`.
///
/// Returns `Err` with a reason for types the API cannot add (SOA is managed
/// by the server, unknown types have no field mapping).
pub(crate) fn rdata_params(data: &RecordData) -> Result<Vec<(&'static str, String)>, String> {
    let mut params: Vec<(&'static str, String)> = Vec::new();
    match data {
        RecordData::A { address } | RecordData::AAAA { address } => {
            params.push(("ipAddress", address.clone()));
        }
        RecordData::CNAME { target } => params.push(("cname", target.clone())),
        RecordData::MX {
            preference,
            exchange,
        } => {
            params.push(("preference", preference.to_string()));
            params.push(("exchange", exchange.clone()));
        }
        RecordData::NS { name_server, glue } => {
            params.push(("nameServer", name_server.clone()));
            if let Some(glue) = glue {
                params.push(("glue", glue.clone()));
            }
        }
        RecordData::TXT { text, split_text } => {
            params.push(("text", text.clone()));
            if *split_text {
                params.push(("splitText", "true".to_string()));
            }
        }
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => {
            params.push(("priority", priority.to_string()));
            params.push(("weight", weight.to_string()));
            params.push(("port", port.to_string()));
            params.push(("target", target.clone()));
        }
        RecordData::PTR { ptr_name } => params.push(("ptrName", ptr_name.clone())),
        RecordData::NAPTR {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        } => {
            params.push(("naptrOrder", order.to_string()));
            params.push(("naptrPreference", preference.to_string()));
            params.push(("naptrFlags", flags.clone()));
            params.push(("naptrServices", services.clone()));
            params.push(("naptrRegexp", regexp.clone()));
            params.push(("naptrReplacement", replacement.clone()));
        }
        RecordData::CAA { flags, tag, value } => {
            params.push(("flags", flags.to_string()));
            params.push(("tag", tag.clone()));
            params.push(("value", value.clone()));
        }
        RecordData::ANAME { target } => params.push(("aname", target.clone())),
        RecordData::URI {
            priority,
            weight,
            uri,
        } => {
            params.push(("uriPriority", priority.to_string()));
            params.push(("uriWeight", weight.to_string()));
            params.push(("uri", uri.clone()));
        }
        RecordData::TLSA {
            certificate_usage,
            selector,
            matching_type,
            association_data,
        } => {
            params.push(("tlsaCertificateUsage", certificate_usage.clone()));
            params.push(("tlsaSelector", selector.clone()));
            params.push(("tlsaMatchingType", matching_type.clone()));
            params.push(("tlsaCertificateAssociationData", association_data.clone()));
        }
        RecordData::DNAME { target } => params.push(("dname", target.clone())),
        RecordData::DS {
            key_tag,
            algorithm,
            digest_type,
            digest,
        } => {
            params.push(("keyTag", key_tag.to_string()));
            params.push(("algorithm", algorithm.clone()));
            params.push(("digestType", digest_type.clone()));
            params.push(("digest", digest.clone()));
        }
        RecordData::SSHFP {
            algorithm,
            fingerprint_type,
            fingerprint,
        } => {
            params.push(("sshfpAlgorithm", algorithm.clone()));
            params.push(("sshfpFingerprintType", fingerprint_type.clone()));
            params.push(("sshfpFingerprint", fingerprint.clone()));
        }
        RecordData::SVCB {
            priority,
            target_name,
            params: svc_params,
            auto_ipv4_hint,
            auto_ipv6_hint,
        }
        | RecordData::HTTPS {
            priority,
            target_name,
            params: svc_params,
            auto_ipv4_hint,
            auto_ipv6_hint,
        } => {
            params.push(("svcPriority", priority.to_string()));
            params.push(("svcTargetName", target_name.clone()));
            params.push(("svcParams", svc_params.clone()));
            if *auto_ipv4_hint {
                params.push(("autoIpv4Hint", "true".to_string()));
            }
            if *auto_ipv6_hint {
                params.push(("autoIpv6Hint", "true".to_string()));
            }
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
            if let Some(protocol) = protocol {
                params.push(("protocol", protocol.clone()));
            }
            params.push(("forwarder", forwarder.clone()));
            params.push(("forwarderPriority", forwarder_priority.to_string()));
            if *dnssec_validation {
                params.push(("dnssecValidation", "true".to_string()));
            }
            if let Some(v) = proxy_type {
                params.push(("proxyType", v.clone()));
            }
            if let Some(v) = proxy_address {
                params.push(("proxyAddress", v.clone()));
            }
            if let Some(v) = proxy_port {
                params.push(("proxyPort", v.to_string()));
            }
            if let Some(v) = proxy_username {
                params.push(("proxyUsername", v.clone()));
            }
            if let Some(v) = proxy_password {
                params.push(("proxyPassword", v.clone()));
            }
        }
        RecordData::APP {
            app_name,
            class_path,
            record_data,
        } => {
            params.push(("appName", app_name.clone()));
            params.push(("classPath", class_path.clone()));
            if !record_data.is_empty() {
                params.push(("recordData", record_data.clone()));
            }
        }
        RecordData::SOA { .. } => return Err("SOA records are managed by the server".to_string()),
        RecordData::Unknown { rtype, .. } => {
            return Err(format!("record type {rtype} has no field mapping"));
        }
    }
    Ok(params)
}

/// The identity-key parameter subset for `zones/records/delete`.
///
/// Deliberately the same tuple [`DnsRecord::same_key`] compares, plus the
/// fields the delete endpoint requires to address one record within a set.
pub(crate) fn key_params(data: &RecordData) -> Result<Vec<(&'static str, String)>, String> {
    let params = match data {
        RecordData::A { address } | RecordData::AAAA { address } => {
            vec![("ipAddress", address.clone())]
        }
        RecordData::CNAME { target } => vec![("cname", target.clone())],
        RecordData::MX {
            preference,
            exchange,
        } => vec![
            ("preference", preference.to_string()),
            ("exchange", exchange.clone()),
        ],
        RecordData::NS { name_server, .. } => vec![("nameServer", name_server.clone())],
        RecordData::TXT { text, split_text } => {
            let mut p = vec![("text", text.clone())];
            if *split_text {
                p.push(("splitText", "true".to_string()));
            }
            p
        }
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => vec![
            ("priority", priority.to_string()),
            ("weight", weight.to_string()),
            ("port", port.to_string()),
            ("target", target.clone()),
        ],
        RecordData::PTR { ptr_name } => vec![("ptrName", ptr_name.clone())],
        RecordData::NAPTR {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        } => vec![
            ("naptrOrder", order.to_string()),
            ("naptrPreference", preference.to_string()),
            ("naptrFlags", flags.clone()),
            ("naptrServices", services.clone()),
            ("naptrRegexp", regexp.clone()),
            ("naptrReplacement", replacement.clone()),
        ],
        RecordData::CAA { flags, tag, value } => vec![
            ("flags", flags.to_string()),
            ("tag", tag.clone()),
            ("value", value.clone()),
        ],
        RecordData::ANAME { target } => vec![("aname", target.clone())],
        RecordData::URI {
            priority,
            weight,
            uri,
        } => vec![
            ("uriPriority", priority.to_string()),
            ("uriWeight", weight.to_string()),
            ("uri", uri.clone()),
        ],
        RecordData::TLSA {
            certificate_usage,
            selector,
            matching_type,
            association_data,
        } => vec![
            ("tlsaCertificateUsage", certificate_usage.clone()),
            ("tlsaSelector", selector.clone()),
            ("tlsaMatchingType", matching_type.clone()),
            ("tlsaCertificateAssociationData", association_data.clone()),
        ],
        RecordData::DNAME { target } => vec![("dname", target.clone())],
        RecordData::DS {
            key_tag,
            algorithm,
            digest_type,
            digest,
        } => vec![
            ("keyTag", key_tag.to_string()),
            ("algorithm", algorithm.clone()),
            ("digestType", digest_type.clone()),
            ("digest", digest.clone()),
        ],
        RecordData::SSHFP {
            algorithm,
            fingerprint_type,
            fingerprint,
        } => vec![
            ("sshfpAlgorithm", algorithm.clone()),
            ("sshfpFingerprintType", fingerprint_type.clone()),
            ("sshfpFingerprint", fingerprint.clone()),
        ],
        RecordData::SVCB {
            priority,
            target_name,
            params,
            ..
        }
        | RecordData::HTTPS {
            priority,
            target_name,
            params,
            ..
        } => vec![
            ("svcPriority", priority.to_string()),
            ("svcTargetName", target_name.clone()),
            ("svcParams", params.clone()),
        ],
        RecordData::FWD {
            protocol,
            forwarder,
            ..
        } => {
            let mut p = Vec::new();
            if let Some(protocol) = protocol {
                p.push(("protocol", protocol.clone()));
            }
            p.push(("forwarder", forwarder.clone()));
            p
        }
        RecordData::APP {
            app_name,
            class_path,
            ..
        } => vec![
            ("appName", app_name.clone()),
            ("classPath", class_path.clone()),
        ],
        RecordData::SOA { .. } => {
            return Err("SOA records cannot be deleted".to_string());
        }
        RecordData::Unknown { rtype, .. } => {
            return Err(format!("record type {rtype} has no field mapping"));
        }
    };
    Ok(params)
}
