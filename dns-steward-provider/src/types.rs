use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============ Record Types ============

/// DNS record type identifier.
///
/// Covers every type the Technitium management API can report. Types the
/// model does not handle are preserved as [`Unknown`](Self::Unknown) so they
/// can be listed and logged, but they never participate in identity matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    TXT,
    SRV,
    PTR,
    NAPTR,
    CAA,
    ANAME,
    URI,
    TLSA,
    SOA,
    DNAME,
    DS,
    SSHFP,
    SVCB,
    HTTPS,
    FWD,
    APP,
    /// A type string the model has no structured representation for.
    Unknown(String),
}

impl RecordType {
    /// The uppercase wire spelling of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::MX => "MX",
            Self::NS => "NS",
            Self::TXT => "TXT",
            Self::SRV => "SRV",
            Self::PTR => "PTR",
            Self::NAPTR => "NAPTR",
            Self::CAA => "CAA",
            Self::ANAME => "ANAME",
            Self::URI => "URI",
            Self::TLSA => "TLSA",
            Self::SOA => "SOA",
            Self::DNAME => "DNAME",
            Self::DS => "DS",
            Self::SSHFP => "SSHFP",
            Self::SVCB => "SVCB",
            Self::HTTPS => "HTTPS",
            Self::FWD => "FWD",
            Self::APP => "APP",
            Self::Unknown(s) => s.as_str(),
        }
    }

    /// Whether at most one record of this type may exist per owner name.
    ///
    /// Single-valued types are updated and deleted directly; multi-valued
    /// types require the read-merge-replace dance so sibling records survive.
    #[must_use]
    pub fn is_single_valued(&self) -> bool {
        matches!(self, Self::CNAME | Self::ANAME | Self::DNAME)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::AAAA,
            "CNAME" => Self::CNAME,
            "MX" => Self::MX,
            "NS" => Self::NS,
            "TXT" => Self::TXT,
            "SRV" => Self::SRV,
            "PTR" => Self::PTR,
            "NAPTR" => Self::NAPTR,
            "CAA" => Self::CAA,
            "ANAME" => Self::ANAME,
            "URI" => Self::URI,
            "TLSA" => Self::TLSA,
            "SOA" => Self::SOA,
            "DNAME" => Self::DNAME,
            "DS" => Self::DS,
            "SSHFP" => Self::SSHFP,
            "SVCB" => Self::SVCB,
            "HTTPS" => Self::HTTPS,
            "FWD" => Self::FWD,
            "APP" => Self::APP,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

// ============ Record Data ============

/// Type-safe representation of DNS record data.
///
/// Each variant carries exactly the fields that record type defines; there is
/// no generic "value" bag. Use [`record_type()`](Self::record_type) for the
/// [`RecordType`] discriminant and [`display_value()`](Self::display_value)
/// for the primary value to show in logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        address: String,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    AAAA {
        address: String,
    },

    /// CNAME record — alias from one name to another.
    CNAME {
        target: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Preference (lower is preferred).
        preference: u16,
        exchange: String,
    },

    /// NS record — authoritative name server, with optional glue addresses.
    NS {
        name_server: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        glue: Option<String>,
    },

    /// TXT record — arbitrary text data.
    TXT {
        text: String,
        /// Split on newlines into multiple character-strings when adding.
        #[serde(default)]
        split_text: bool,
    },

    /// SRV record — service locator.
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },

    /// PTR record — reverse-lookup pointer.
    PTR {
        ptr_name: String,
    },

    /// NAPTR record — naming authority pointer.
    NAPTR {
        order: u16,
        preference: u16,
        flags: String,
        services: String,
        regexp: String,
        replacement: String,
    },

    /// CAA record — Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        value: String,
    },

    /// ANAME record — apex alias (Technitium extension).
    ANAME {
        target: String,
    },

    /// URI record.
    URI {
        priority: u16,
        weight: u16,
        uri: String,
    },

    /// TLSA record — TLS certificate association.
    TLSA {
        certificate_usage: String,
        selector: String,
        matching_type: String,
        association_data: String,
    },

    /// SOA record — start of authority (read-only from the server).
    SOA {
        primary_name_server: String,
        responsible_person: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },

    /// DNAME record — subtree redirection.
    DNAME {
        target: String,
    },

    /// DS record — delegation signer.
    DS {
        key_tag: u16,
        algorithm: String,
        digest_type: String,
        digest: String,
    },

    /// SSHFP record — SSH host key fingerprint.
    SSHFP {
        algorithm: String,
        fingerprint_type: String,
        fingerprint: String,
    },

    /// SVCB record — service binding.
    SVCB {
        priority: u16,
        target_name: String,
        params: String,
        #[serde(default)]
        auto_ipv4_hint: bool,
        #[serde(default)]
        auto_ipv6_hint: bool,
    },

    /// HTTPS record — HTTPS service binding.
    HTTPS {
        priority: u16,
        target_name: String,
        params: String,
        #[serde(default)]
        auto_ipv4_hint: bool,
        #[serde(default)]
        auto_ipv6_hint: bool,
    },

    /// FWD record — conditional forwarder (Technitium extension).
    FWD {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        protocol: Option<String>,
        forwarder: String,
        #[serde(default)]
        forwarder_priority: u16,
        #[serde(default)]
        dnssec_validation: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proxy_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proxy_address: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proxy_port: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proxy_username: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proxy_password: Option<String>,
    },

    /// APP record — Technitium application record.
    APP {
        app_name: String,
        class_path: String,
        #[serde(default)]
        record_data: String,
    },

    /// A record type the model does not handle; raw data preserved verbatim.
    Unknown {
        rtype: String,
        rdata: String,
    },
}

impl RecordData {
    /// Returns the [`RecordType`] discriminant for this record data.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A { .. } => RecordType::A,
            Self::AAAA { .. } => RecordType::AAAA,
            Self::CNAME { .. } => RecordType::CNAME,
            Self::MX { .. } => RecordType::MX,
            Self::NS { .. } => RecordType::NS,
            Self::TXT { .. } => RecordType::TXT,
            Self::SRV { .. } => RecordType::SRV,
            Self::PTR { .. } => RecordType::PTR,
            Self::NAPTR { .. } => RecordType::NAPTR,
            Self::CAA { .. } => RecordType::CAA,
            Self::ANAME { .. } => RecordType::ANAME,
            Self::URI { .. } => RecordType::URI,
            Self::TLSA { .. } => RecordType::TLSA,
            Self::SOA { .. } => RecordType::SOA,
            Self::DNAME { .. } => RecordType::DNAME,
            Self::DS { .. } => RecordType::DS,
            Self::SSHFP { .. } => RecordType::SSHFP,
            Self::SVCB { .. } => RecordType::SVCB,
            Self::HTTPS { .. } => RecordType::HTTPS,
            Self::FWD { .. } => RecordType::FWD,
            Self::APP { .. } => RecordType::APP,
            Self::Unknown { rtype, .. } => RecordType::Unknown(rtype.clone()),
        }
    }

    /// The primary value for display and log fields.
    pub fn display_value(&self) -> &str {
        match self {
            Self::A { address } | Self::AAAA { address } => address,
            Self::CNAME { target }
            | Self::ANAME { target }
            | Self::DNAME { target }
            | Self::SRV { target, .. } => target,
            Self::MX { exchange, .. } => exchange,
            Self::NS { name_server, .. } => name_server,
            Self::TXT { text, .. } => text,
            Self::PTR { ptr_name } => ptr_name,
            Self::NAPTR { replacement, .. } => replacement,
            Self::CAA { value, .. } => value,
            Self::URI { uri, .. } => uri,
            Self::TLSA {
                association_data, ..
            } => association_data,
            Self::SOA {
                primary_name_server,
                ..
            } => primary_name_server,
            Self::DS { digest, .. } => digest,
            Self::SSHFP { fingerprint, .. } => fingerprint,
            Self::SVCB { target_name, .. } | Self::HTTPS { target_name, .. } => target_name,
            Self::FWD { forwarder, .. } => forwarder,
            Self::APP { app_name, .. } => app_name,
            Self::Unknown { rdata, .. } => rdata,
        }
    }

    /// Whether two payloads of the same type refer to the same record.
    ///
    /// The key tuple follows each type's semantic uniqueness constraint:
    /// two A records differing only in TTL are the same record, two A records
    /// with different addresses are siblings. Single-valued types match on
    /// presence alone. SOA and unknown types never match.
    fn same_key(&self, other: &Self) -> bool {
        match (self, other) {
            // empty-on-both-sides is a non-match: malformed data must not merge
            (Self::A { address: a }, Self::A { address: b })
            | (Self::AAAA { address: a }, Self::AAAA { address: b }) => !a.is_empty() && a == b,

            // only one record of these types can exist per name
            (Self::CNAME { .. }, Self::CNAME { .. })
            | (Self::ANAME { .. }, Self::ANAME { .. })
            | (Self::DNAME { .. }, Self::DNAME { .. }) => true,

            (Self::MX { exchange: a, .. }, Self::MX { exchange: b, .. }) => a == b,

            (Self::NS { name_server: a, .. }, Self::NS { name_server: b, .. }) => a == b,

            (Self::TXT { text: a, .. }, Self::TXT { text: b, .. }) => a == b,

            (
                Self::SRV {
                    port: p1,
                    target: t1,
                    ..
                },
                Self::SRV {
                    port: p2,
                    target: t2,
                    ..
                },
            ) => p1 == p2 && t1 == t2,

            (Self::PTR { ptr_name: a }, Self::PTR { ptr_name: b }) => a == b,

            (
                Self::NAPTR {
                    flags: f1,
                    services: s1,
                    regexp: r1,
                    replacement: p1,
                    ..
                },
                Self::NAPTR {
                    flags: f2,
                    services: s2,
                    regexp: r2,
                    replacement: p2,
                    ..
                },
            ) => f1 == f2 && s1 == s2 && r1 == r2 && p1 == p2,

            (
                Self::CAA {
                    flags: f1,
                    tag: t1,
                    value: v1,
                },
                Self::CAA {
                    flags: f2,
                    tag: t2,
                    value: v2,
                },
            ) => f1 == f2 && t1 == t2 && v1 == v2,

            (
                Self::URI {
                    priority: p1,
                    weight: w1,
                    uri: u1,
                },
                Self::URI {
                    priority: p2,
                    weight: w2,
                    uri: u2,
                },
            ) => p1 == p2 && w1 == w2 && u1 == u2,

            (
                Self::TLSA {
                    certificate_usage: u1,
                    selector: s1,
                    matching_type: m1,
                    association_data: d1,
                },
                Self::TLSA {
                    certificate_usage: u2,
                    selector: s2,
                    matching_type: m2,
                    association_data: d2,
                },
            ) => u1 == u2 && s1 == s2 && m1 == m2 && d1 == d2,

            (
                Self::DS {
                    key_tag: k1,
                    algorithm: a1,
                    digest_type: t1,
                    digest: d1,
                },
                Self::DS {
                    key_tag: k2,
                    algorithm: a2,
                    digest_type: t2,
                    digest: d2,
                },
            ) => k1 == k2 && a1 == a2 && t1 == t2 && d1 == d2,

            (
                Self::SSHFP {
                    algorithm: a1,
                    fingerprint_type: t1,
                    fingerprint: f1,
                },
                Self::SSHFP {
                    algorithm: a2,
                    fingerprint_type: t2,
                    fingerprint: f2,
                },
            ) => a1 == a2 && t1 == t2 && f1 == f2,

            (
                Self::SVCB {
                    target_name: t1,
                    params: p1,
                    ..
                },
                Self::SVCB {
                    target_name: t2,
                    params: p2,
                    ..
                },
            )
            | (
                Self::HTTPS {
                    target_name: t1,
                    params: p1,
                    ..
                },
                Self::HTTPS {
                    target_name: t2,
                    params: p2,
                    ..
                },
            ) => t1 == t2 && p1 == p2,

            (Self::FWD { forwarder: a, .. }, Self::FWD { forwarder: b, .. }) => a == b,

            (
                Self::APP {
                    app_name: a1,
                    class_path: c1,
                    ..
                },
                Self::APP {
                    app_name: a2,
                    class_path: c2,
                    ..
                },
            ) => a1 == a2 && c1 == c2,

            // SOA, Unknown, and mismatched variants: never the same record
            _ => false,
        }
    }
}

// ============ DNS Record ============

/// A DNS resource record, owner name relative to its zone (`"@"` for apex).
///
/// A record has no assigned identifier; identity is structural, via
/// [`same_key`](Self::same_key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Owner name relative to the zone, `"@"` for the zone apex.
    pub name: String,
    /// Time to live in seconds, `[0, 604800]`.
    pub ttl: u32,
    /// Type-specific record data.
    pub data: RecordData,
    /// Free-form comment stored with the record (Technitium only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Delete the record automatically after this many seconds (Technitium only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_ttl: Option<u32>,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
            comments: None,
            expiry_ttl: None,
        }
    }

    /// Returns the [`RecordType`] of this record.
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Whether `other` refers to the same record as `self`.
    ///
    /// Records of different type or owner name are never the same. Within
    /// equal type+name the comparison is the type-specific key tuple; see
    /// [`RecordData::same_key`] for the per-type rules.
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        if self.record_type() != other.record_type() || self.name != other.name {
            return false;
        }
        self.data.same_key(&other.data)
    }

    /// Convert to the reduced form used when replacing a whole record set.
    pub fn to_update(&self) -> UpdateRecord {
        UpdateRecord {
            ttl: self.ttl,
            data: self.data.clone(),
        }
    }
}

/// Reduced record representation, without the owner name.
///
/// Used when replacing the full record set for one type+name: the name is
/// carried once by the call, each entry holds only what differs between the
/// set's members. Equality covers TTL and the full payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub ttl: u32,
    pub data: RecordData,
}

// ============ Zones ============

/// Technitium zone type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneType {
    Primary,
    Secondary,
    Stub,
    Forwarder,
    SecondaryForwarder,
    Catalog,
    SecondaryCatalog,
}

impl ZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Stub => "Stub",
            Self::Forwarder => "Forwarder",
            Self::SecondaryForwarder => "SecondaryForwarder",
            Self::Catalog => "Catalog",
            Self::SecondaryCatalog => "SecondaryCatalog",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ZoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Primary" => Ok(Self::Primary),
            "Secondary" => Ok(Self::Secondary),
            "Stub" => Ok(Self::Stub),
            "Forwarder" => Ok(Self::Forwarder),
            "SecondaryForwarder" => Ok(Self::SecondaryForwarder),
            "Catalog" => Ok(Self::Catalog),
            "SecondaryCatalog" => Ok(Self::SecondaryCatalog),
            other => Err(format!("unknown zone type: {other}")),
        }
    }
}

/// A DNS zone: creation parameters plus read-only server status.
///
/// Zones are treated as immutable — any change to name or type is realized
/// as delete + recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsZone {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: Option<ZoneType>,

    // creation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_soa_serial_date_scheme: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_name_server_addresses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_transfer_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsig_key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_zone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialize_forwarder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,

    // read-only server status
    pub internal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_serial: Option<u32>,
    #[serde(
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry: Option<chrono::DateTime<chrono::Utc>>,
    pub is_expired: bool,
    pub sync_failed: bool,
    #[serde(
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub disabled: bool,
}

impl DnsZone {
    pub fn new(name: impl Into<String>, zone_type: ZoneType) -> Self {
        Self {
            name: name.into(),
            zone_type: Some(zone_type),
            ..Self::default()
        }
    }
}

// ============ Credentials ============

/// Identifies which DNS server client implementation to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Technitium DNS Server management API. Requires feature `technitium`.
    #[cfg(feature = "technitium")]
    Technitium,
    /// GoDaddy DNS v1 API. Requires feature `godaddy`.
    #[cfg(feature = "godaddy")]
    Godaddy,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "technitium")]
            Self::Technitium => write!(f, "technitium"),
            #[cfg(feature = "godaddy")]
            Self::Godaddy => write!(f, "godaddy"),
        }
    }
}

/// Validation error for client credentials.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    #[error("Missing required field: {label}")]
    MissingField {
        provider: ProviderKind,
        field: String,
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    #[error("Field must not be empty: {label}")]
    EmptyField {
        provider: ProviderKind,
        field: String,
        label: String,
    },
}

/// Type-safe credential container for the supported DNS server APIs.
///
/// Pass to [`create_client()`](crate::create_client) to instantiate a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Technitium management API credentials. Requires feature `technitium`.
    #[cfg(feature = "technitium")]
    #[serde(rename = "technitium")]
    Technitium {
        /// Server base URL, e.g. `"https://dns.example.net:5380"`.
        base_url: String,
        /// API token (create one in the Technitium admin panel).
        token: String,
        /// Accept self-signed certificates.
        #[serde(default)]
        skip_cert_verify: bool,
    },

    /// GoDaddy DNS API credentials. Requires feature `godaddy`.
    #[cfg(feature = "godaddy")]
    #[serde(rename = "godaddy")]
    Godaddy {
        /// API base URL; the production endpoint unless overridden (OTE).
        api_url: String,
        key: String,
        secret: String,
    },
}

#[cfg(feature = "godaddy")]
pub(crate) const GODADDY_DEFAULT_API_URL: &str = "https://api.godaddy.com";

impl ProviderCredentials {
    /// Construct credentials from a flat key-value map, validating required
    /// fields.
    pub fn from_map(
        provider: &ProviderKind,
        map: &HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            #[cfg(feature = "technitium")]
            ProviderKind::Technitium => Ok(Self::Technitium {
                base_url: Self::required_field(provider, map, "baseUrl", "Server URL")?,
                token: Self::required_field(provider, map, "token", "API Token")?,
                skip_cert_verify: map
                    .get("skipCertVerify")
                    .is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
            }),
            #[cfg(feature = "godaddy")]
            ProviderKind::Godaddy => Ok(Self::Godaddy {
                api_url: map
                    .get("apiUrl")
                    .map_or_else(|| GODADDY_DEFAULT_API_URL.to_string(), Clone::clone),
                key: Self::required_field(provider, map, "key", "API Key")?,
                secret: Self::required_field(provider, map, "secret", "API Secret")?,
            }),
        }
    }

    /// Resolve credentials from the environment.
    ///
    /// Technitium reads `TECHNITIUM_API_URL`, `TECHNITIUM_API_TOKEN` and
    /// `TECHNITIUM_SKIP_CERT_VERIFY`; GoDaddy reads `GODADDY_API_URL`
    /// (optional), `GODADDY_API_KEY` and `GODADDY_API_SECRET`.
    pub fn from_env(provider: &ProviderKind) -> Result<Self, CredentialValidationError> {
        let mut map = HashMap::new();
        match provider {
            #[cfg(feature = "technitium")]
            ProviderKind::Technitium => {
                for (var, key) in [
                    ("TECHNITIUM_API_URL", "baseUrl"),
                    ("TECHNITIUM_API_TOKEN", "token"),
                    ("TECHNITIUM_SKIP_CERT_VERIFY", "skipCertVerify"),
                ] {
                    if let Ok(v) = std::env::var(var) {
                        map.insert(key.to_string(), v);
                    }
                }
            }
            #[cfg(feature = "godaddy")]
            ProviderKind::Godaddy => {
                for (var, key) in [
                    ("GODADDY_API_URL", "apiUrl"),
                    ("GODADDY_API_KEY", "key"),
                    ("GODADDY_API_SECRET", "secret"),
                ] {
                    if let Ok(v) = std::env::var(var) {
                        map.insert(key.to_string(), v);
                    }
                }
            }
        }
        Self::from_map(provider, &map)
    }

    /// Returns the [`ProviderKind`] corresponding to this credential variant.
    pub fn provider_kind(&self) -> ProviderKind {
        match self {
            #[cfg(feature = "technitium")]
            Self::Technitium { .. } => ProviderKind::Technitium,
            #[cfg(feature = "godaddy")]
            Self::Godaddy { .. } => ProviderKind::Godaddy,
        }
    }

    fn required_field(
        provider: &ProviderKind,
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                provider: provider.clone(),
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                provider: provider.clone(),
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }
}
