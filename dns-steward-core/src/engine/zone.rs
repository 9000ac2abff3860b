//! Zone reconciliation.
//!
//! Zones are coarse-grained and immutable in place: any change to the
//! declared zone is realized as delete + recreate. Reads scan the server's
//! zone list by name and report absence as drift, mirroring the record
//! reconciler.

use std::sync::Arc;

use dns_steward_provider::DnsZone;

use crate::engine::ReconcilerContext;
use crate::error::CoreResult;

/// Result of refreshing one zone from the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneReadOutcome {
    /// The zone no longer exists upstream; the caller drops it from state.
    Absent,
    /// The zone exists; carries the server's view including status fields.
    Found(DnsZone),
}

/// Reconciles declared zones against the server.
pub struct ZoneReconciler {
    ctx: Arc<ReconcilerContext>,
}

impl ZoneReconciler {
    #[must_use]
    pub fn new(ctx: Arc<ReconcilerContext>) -> Self {
        Self { ctx }
    }

    pub async fn create(&self, desired: &DnsZone) -> CoreResult<()> {
        let _guard = self.ctx.op_lock.lock().await;
        log::info!("zone create: name={} type={:?}", desired.name, desired.zone_type);

        self.ctx.client.create_zone(desired).await?;
        Ok(())
    }

    /// Look the zone up by name in the server's zone list.
    pub async fn read(&self, zone_name: &str) -> CoreResult<ZoneReadOutcome> {
        let _guard = self.ctx.op_lock.lock().await;
        log::info!("zone read: name={zone_name}");

        let zones = self.ctx.client.list_zones().await?;
        match zones.into_iter().find(|z| z.name == zone_name) {
            Some(zone) => Ok(ZoneReadOutcome::Found(zone)),
            None => {
                log::info!("zone read: zone is currently absent");
                Ok(ZoneReadOutcome::Absent)
            }
        }
    }

    /// Replace the old zone with the new one.
    ///
    /// There is no in-place zone mutation on the API; the old zone is
    /// deleted first and the new one created, records and all.
    pub async fn update(&self, old: &DnsZone, new: &DnsZone) -> CoreResult<()> {
        let _guard = self.ctx.op_lock.lock().await;
        log::info!("zone update: name={} -> {}", old.name, new.name);

        self.ctx.client.delete_zone(&old.name).await?;
        self.ctx.client.create_zone(new).await?;
        Ok(())
    }

    pub async fn delete(&self, zone_name: &str) -> CoreResult<()> {
        let _guard = self.ctx.op_lock.lock().await;
        log::info!("zone delete: name={zone_name}");

        self.ctx.client.delete_zone(zone_name).await?;
        Ok(())
    }
}
