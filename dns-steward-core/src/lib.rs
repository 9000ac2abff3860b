//! # dns-steward-core
//!
//! Reconciliation engine for declarative DNS management: given desired
//! record/zone state and a [`DnsApiClient`](dns_steward_provider::DnsApiClient)
//! pointed at the server, the engine computes the minimal mutation that
//! converges live state to desired state without disturbing records it does
//! not manage.
//!
//! The hard part is record identity: multi-valued record types (A, MX, TXT,
//! NS, SRV, …) have no per-record identifier, so "which live record is mine"
//! is decided structurally and every update/delete of one record must carry
//! its siblings through unchanged. See [`RecordReconciler`] for the
//! operations and their drift semantics.
//!
//! All operations of one [`ReconcilerContext`] are serialized by an internal
//! mutex: the read-merge-replace sequences are not atomic at the server, so
//! concurrent operations within one process must not interleave.

pub mod engine;
pub mod error;
pub mod import;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use engine::{
    KeepOutcome, ReadOutcome, ReconcilerContext, RecordReconciler, ZoneReadOutcome, ZoneReconciler,
};
pub use error::{CoreError, CoreResult};
pub use import::{
    CaaImportValue, ImportError, MxImportValue, RecordImportParts, SrvImportValue,
    parse_caa_import_value, parse_mx_import_value, parse_record_import, parse_record_import_id,
    parse_srv_import_value,
};
pub use state::{RecordDraft, RecordState};
