//! Import-identifier parsing.
//!
//! Existing server-side records and zones are adopted into desired state via
//! colon-delimited identifiers: `zone:name:TYPE:value` for records, with
//! type-specific value shapes for MX (`preference:exchange`), SRV
//! (`priority:weight:port:target`) and CAA (`flags:tag:value`). Values are
//! split with a bounded count so content that legitimately contains colons
//! (TXT payloads, URIs) survives intact in the final field.

use serde::Serialize;
use thiserror::Error;

use dns_steward_provider::{RecordData, RecordType};

use crate::error::CoreResult;
use crate::state::{DEFAULT_TTL, RecordState};

/// Import identifier separator.
const IMPORT_SEP: char = ':';

/// Import parsing error.
///
/// `Format` means the identifier's shape is wrong (arity, empty part);
/// `Field` means one specific field failed to parse. Callers rely on the
/// distinction for precise diagnostics, so it is a typed split rather than
/// message text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ImportError {
    #[error("{summary}: {detail}")]
    Format { summary: String, detail: String },
    #[error("{summary}: {detail}")]
    Field { summary: String, detail: String },
}

impl ImportError {
    fn format(summary: &str, detail: String) -> Self {
        Self::Format {
            summary: summary.to_string(),
            detail,
        }
    }

    fn field(summary: &str, detail: String) -> Self {
        Self::Field {
            summary: summary.to_string(),
            detail,
        }
    }

    /// The short, stable part of the diagnostic.
    pub fn summary(&self) -> &str {
        match self {
            Self::Format { summary, .. } | Self::Field { summary, .. } => summary,
        }
    }
}

/// A generic record import identifier, split into its four parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordImportParts {
    pub zone: String,
    pub name: String,
    pub record_type: String,
    /// The remainder after the third separator; may itself contain colons.
    pub value: String,
}

/// An MX import value: `preference:exchange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxImportValue {
    pub preference: u16,
    pub exchange: String,
}

/// An SRV import value: `priority:weight:port:target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvImportValue {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// A CAA import value: `flags:tag:value`, value captured greedily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaaImportValue {
    pub flags: String,
    pub tag: String,
    pub value: String,
}

/// Parse `zone:name:TYPE:value`; the value keeps any further colons.
pub fn parse_record_import_id(id: &str) -> Result<RecordImportParts, ImportError> {
    let parts: Vec<&str> = id.splitn(4, IMPORT_SEP).collect();
    if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
        return Err(ImportError::format(
            "Unexpected Import Identifier",
            format!(
                "Import ID must be in format zone:name:TYPE:value, \
                 like example.com:www:CNAME:www.other.com. Got: {id:?}"
            ),
        ));
    }
    Ok(RecordImportParts {
        zone: parts[0].to_string(),
        name: parts[1].to_string(),
        record_type: parts[2].to_string(),
        value: parts[3].to_string(),
    })
}

fn parse_number(
    text: &str,
    field_summary: &str,
    field: &str,
) -> Result<u16, ImportError> {
    text.parse::<u16>().map_err(|_| {
        ImportError::field(
            field_summary,
            format!("{field} must be an integer between 0 and 65535, got {text:?}"),
        )
    })
}

/// Parse an MX import value: `preference:exchange`.
pub fn parse_mx_import_value(value: &str) -> Result<MxImportValue, ImportError> {
    let parts: Vec<&str> = value.splitn(2, IMPORT_SEP).collect();
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(ImportError::format(
            "Invalid MX record format",
            format!("MX value must be in format preference:exchange, got {value:?}"),
        ));
    }
    Ok(MxImportValue {
        preference: parse_number(parts[0], "Invalid MX preference", "preference")?,
        exchange: parts[1].to_string(),
    })
}

/// Parse an SRV import value: `priority:weight:port:target`.
pub fn parse_srv_import_value(value: &str) -> Result<SrvImportValue, ImportError> {
    let parts: Vec<&str> = value.splitn(4, IMPORT_SEP).collect();
    if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
        return Err(ImportError::format(
            "Invalid SRV record format",
            format!("SRV value must be in format priority:weight:port:target, got {value:?}"),
        ));
    }
    Ok(SrvImportValue {
        priority: parse_number(parts[0], "Invalid SRV priority", "priority")?,
        weight: parse_number(parts[1], "Invalid SRV weight", "weight")?,
        port: parse_number(parts[2], "Invalid SRV port", "port")?,
        target: parts[3].to_string(),
    })
}

/// Parse a CAA import value: `flags:tag:value`; the value keeps any colons.
pub fn parse_caa_import_value(value: &str) -> Result<CaaImportValue, ImportError> {
    let parts: Vec<&str> = value.splitn(3, IMPORT_SEP).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(ImportError::format(
            "Invalid CAA record format",
            format!("CAA value must be in format flags:tag:value, got {value:?}"),
        ));
    }
    Ok(CaaImportValue {
        flags: parts[0].to_string(),
        tag: parts[1].to_string(),
        value: parts[2].to_string(),
    })
}

/// Parse a full record import identifier into desired state.
///
/// Simple value types take the value verbatim; MX, SRV and CAA route through
/// their value parsers. The TTL defaults to [`DEFAULT_TTL`] and is refreshed
/// from the server by the first read.
pub fn parse_record_import(id: &str) -> CoreResult<RecordState> {
    let parts = parse_record_import_id(id)?;
    let rtype = RecordType::from(parts.record_type.as_str());

    let data = match rtype {
        RecordType::A => RecordData::A {
            address: parts.value,
        },
        RecordType::AAAA => RecordData::AAAA {
            address: parts.value,
        },
        RecordType::CNAME => RecordData::CNAME { target: parts.value },
        RecordType::ANAME => RecordData::ANAME { target: parts.value },
        RecordType::DNAME => RecordData::DNAME { target: parts.value },
        RecordType::NS => RecordData::NS {
            name_server: parts.value,
            glue: None,
        },
        RecordType::PTR => RecordData::PTR {
            ptr_name: parts.value,
        },
        RecordType::TXT => RecordData::TXT {
            text: parts.value,
            split_text: false,
        },
        RecordType::MX => {
            let mx = parse_mx_import_value(&parts.value)?;
            RecordData::MX {
                preference: mx.preference,
                exchange: mx.exchange,
            }
        }
        RecordType::SRV => {
            let srv = parse_srv_import_value(&parts.value)?;
            RecordData::SRV {
                priority: srv.priority,
                weight: srv.weight,
                port: srv.port,
                target: srv.target,
            }
        }
        RecordType::CAA => {
            let caa = parse_caa_import_value(&parts.value)?;
            let flags = caa.flags.parse::<u8>().map_err(|_| {
                ImportError::field(
                    "Invalid CAA flags",
                    format!(
                        "flags must be an integer between 0 and 255, got {:?}",
                        caa.flags
                    ),
                )
            })?;
            RecordData::CAA {
                flags,
                tag: caa.tag,
                value: caa.value,
            }
        }
        other => {
            return Err(ImportError::format(
                "Unsupported Import Type",
                format!("record type {other} cannot be imported from an identifier"),
            )
            .into());
        }
    };

    Ok(RecordState::new(parts.zone, parts.name, DEFAULT_TTL, data))
}
