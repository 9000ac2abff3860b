//! Record reconciliation.
//!
//! Converges one declared record against the server's live record set
//! without disturbing sibling records that share its type and owner name.
//! The heart of it is the keep-list computation: fetch the live set, split
//! it by [`DnsRecord::same_key`] into "the record being changed" and
//! "everything else", and carry everything else through any replace call
//! untouched.

use std::sync::Arc;

use dns_steward_provider::{DnsRecord, UpdateRecord};

use crate::engine::ReconcilerContext;
use crate::error::CoreResult;
use crate::state::RecordState;

/// Result of refreshing one record from the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// No live record matches the state's key; the record was removed
    /// out-of-band. A normal outcome, not an error; the caller drops the
    /// record from its state.
    Absent,
    /// A live record matched; `state` carries the refreshed values.
    Found {
        state: RecordState,
        /// Extra records beyond the first that also matched the key. Zero in
        /// healthy zones; nonzero means duplicate instances exist upstream
        /// and the last one encountered won.
        duplicates: usize,
    },
}

/// Result of computing the records to keep across an update or delete.
///
/// Both arms carry the keep-list: the live siblings, in reduced form, that
/// any replace call must preserve. `Gone` signals that no live record
/// matched the state's key (the target vanished upstream), which update
/// and delete handle as a satisfied precondition, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum KeepOutcome {
    Found(Vec<UpdateRecord>),
    Gone(Vec<UpdateRecord>),
}

impl KeepOutcome {
    #[must_use]
    pub fn is_gone(&self) -> bool {
        matches!(self, Self::Gone(_))
    }

    /// The keep-list, whichever arm holds it.
    #[must_use]
    pub fn into_records(self) -> Vec<UpdateRecord> {
        match self {
            Self::Found(records) | Self::Gone(records) => records,
        }
    }
}

/// Reconciles declared records against the server.
pub struct RecordReconciler {
    ctx: Arc<ReconcilerContext>,
}

impl RecordReconciler {
    #[must_use]
    pub fn new(ctx: Arc<ReconcilerContext>) -> Self {
        Self { ctx }
    }

    /// Create the record on the server.
    ///
    /// Plain add with overwrite off: if an identical record already exists
    /// (say, created out-of-band after the plan), the server's uniqueness
    /// error surfaces verbatim rather than being silently converged; the
    /// operator resolves it by importing the existing record.
    pub async fn create(&self, desired: &RecordState) -> CoreResult<()> {
        let _guard = self.ctx.op_lock.lock().await;
        log::info!(
            "create: zone={} type={} name={} data={}",
            desired.zone,
            desired.record_type(),
            desired.name,
            desired.data.display_value()
        );

        self.ctx
            .client
            .add_record(&desired.zone, &desired.to_record())
            .await?;
        Ok(())
    }

    /// Refresh the record from the server, detecting drift.
    pub async fn read(&self, state: &RecordState) -> CoreResult<ReadOutcome> {
        let _guard = self.ctx.op_lock.lock().await;
        let rtype = state.record_type();
        log::info!(
            "read: zone={} type={rtype} name={}",
            state.zone,
            state.name
        );

        let live = self
            .ctx
            .client
            .get_records(&state.zone, &rtype, &state.name)
            .await?;
        if live.is_empty() {
            log::debug!("read: no live records for this type+name");
        } else {
            log::debug!("read: got {} live records", live.len());
        }

        let state_record = state.to_record();
        let mut matched: Option<DnsRecord> = None;
        let mut matches = 0usize;
        for record in live {
            if record.same_key(&state_record) {
                matches += 1;
                // last match wins; see the duplicates count
                matched = Some(record);
            }
        }

        match matched {
            None => {
                // quite normal, e.g. deleted out-of-band since the last run
                log::info!("read: resource is currently absent");
                Ok(ReadOutcome::Absent)
            }
            Some(record) => {
                if matches > 1 {
                    log::warn!(
                        "read: duplicate resource instances present ({matches} matches), \
                         using the last one"
                    );
                }
                Ok(ReadOutcome::Found {
                    state: RecordState::from_record(&state.zone, &record),
                    duplicates: matches - 1,
                })
            }
        }
    }

    /// Fetch the live set for the state's type+name and return everything
    /// that does NOT match its key, converted to reduced form.
    ///
    /// These are the records an update or delete must write back unchanged.
    /// Exactly one live record is expected to match; zero matches yields the
    /// `Gone` arm, more than one is logged and treated as found.
    ///
    /// Callers hold the operation guard; this does not lock.
    pub async fn records_to_keep(&self, state: &RecordState) -> CoreResult<KeepOutcome> {
        let rtype = state.record_type();
        log::debug!(
            "recs-to-keep: zone={} type={rtype} name={}",
            state.zone,
            state.name
        );

        let live = self
            .ctx
            .client
            .get_records(&state.zone, &rtype, &state.name)
            .await?;
        if live.is_empty() {
            // strange but workable for both delete (noop) and update (keep nothing)
            log::warn!("recs-to-keep: API returned no records, will continue");
        }

        let state_record = state.to_record();
        let mut keep = Vec::new();
        let mut matches = 0usize;
        for record in live {
            if record.same_key(&state_record) {
                matches += 1;
            } else {
                keep.push(record.to_update());
            }
        }
        log::debug!("recs-to-keep: keeping {} records", keep.len());

        if matches != 1 {
            log::warn!("recs-to-keep: want exactly 1 matching record, got {matches}");
            if matches == 0 {
                return Ok(KeepOutcome::Gone(keep));
            }
        }
        Ok(KeepOutcome::Found(keep))
    }

    /// Converge the server from `old` to `new`.
    ///
    /// Single-valued types replace their one record directly. Multi-valued
    /// types write back the keep-list plus the new value, so siblings
    /// survive; if the old record is already gone AND the new value is
    /// already live, there is nothing to write at all.
    pub async fn update(&self, old: &RecordState, new: &RecordState) -> CoreResult<()> {
        let _guard = self.ctx.op_lock.lock().await;
        let rtype = new.record_type();
        log::info!(
            "update: zone={} type={rtype} name={} data={}",
            new.zone,
            new.name,
            new.data.display_value()
        );

        if rtype.is_single_valued() {
            // only one record can exist; no need to read the rest
            let replacement = [new.to_record().to_update()];
            self.ctx
                .client
                .set_records(&new.zone, &rtype, &new.name, &replacement)
                .await?;
            return Ok(());
        }

        let keep = self.records_to_keep(old).await?;
        let old_gone = keep.is_gone();
        if old_gone {
            // should not happen after a refresh, but the world moves
            log::info!("update: current record is already gone");
        }
        let mut records = keep.into_records();
        log::info!("update: got {} records to keep", records.len());

        let ours = new.to_record().to_update();
        let new_present = records.contains(&ours);
        if new_present {
            log::info!("update: updated record is already present");
        } else {
            records.push(ours);
        }

        if old_gone && new_present {
            log::info!("update: nothing left to do");
            return Ok(());
        }

        self.ctx
            .client
            .set_records(&new.zone, &rtype, &new.name, &records)
            .await?;
        Ok(())
    }

    /// Remove the record from the server, leaving siblings in place.
    pub async fn delete(&self, state: &RecordState) -> CoreResult<()> {
        let _guard = self.ctx.op_lock.lock().await;
        let rtype = state.record_type();
        log::info!(
            "delete: zone={} type={rtype} name={}",
            state.zone,
            state.name
        );

        if rtype.is_single_valued() {
            // deleting the whole set is exact for single-valued types
            self.ctx
                .client
                .delete_records(&state.zone, &rtype, &state.name)
                .await?;
            return Ok(());
        }

        match self.records_to_keep(state).await? {
            KeepOutcome::Gone(_) => {
                // desired outcome already holds
                log::info!("delete: record already gone");
                Ok(())
            }
            KeepOutcome::Found(keep) => {
                log::info!("delete: got {} records to keep", keep.len());
                if keep.is_empty() {
                    self.ctx
                        .client
                        .delete_records(&state.zone, &rtype, &state.name)
                        .await?;
                } else {
                    self.ctx
                        .client
                        .set_records(&state.zone, &rtype, &state.name, &keep)
                        .await?;
                }
                Ok(())
            }
        }
    }
}
