//! Reconciliation engine.
//!
//! One [`ReconcilerContext`] is constructed per provider instance and shared
//! by every reconciler built from it. The context owns the API client and
//! the serialization guard, so there are no ambient globals.

mod record;
mod zone;

pub use record::{KeepOutcome, ReadOutcome, RecordReconciler};
pub use zone::{ZoneReadOutcome, ZoneReconciler};

use std::sync::Arc;

use tokio::sync::Mutex;

use dns_steward_provider::DnsApiClient;

/// Shared state for all reconcilers of one provider instance.
///
/// `op_lock` serializes every create/read/update/delete body. The server has
/// no transactional multi-record API, so the read-merge-replace sequences in
/// the record reconciler are not atomic server-side; forcing a total order
/// inside this process is what keeps two concurrent operations on the same
/// name from clobbering each other. Out-of-band edits are not covered; those
/// surface as drift at read time.
pub struct ReconcilerContext {
    pub client: Arc<dyn DnsApiClient>,
    pub(crate) op_lock: Mutex<()>,
}

impl ReconcilerContext {
    #[must_use]
    pub fn new(client: Arc<dyn DnsApiClient>) -> Arc<Self> {
        Arc::new(Self {
            client,
            op_lock: Mutex::new(()),
        })
    }
}
