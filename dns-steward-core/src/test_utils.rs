//! In-memory API client for engine tests.
//!
//! Stores records and zones in plain vectors and journals every call, so
//! tests can assert not only the resulting server state but also *which*
//! mutating calls were issued (e.g. that a delete of an already-gone record
//! issued none at all).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use dns_steward_provider::{
    ApiError, DnsApiClient, DnsRecord, DnsZone, RecordType, Result, UpdateRecord,
};

pub struct MockDnsClient {
    records: Mutex<Vec<(String, DnsRecord)>>,
    zones: Mutex<Vec<DnsZone>>,
    calls: Mutex<Vec<String>>,
    mutating_calls: Mutex<Vec<String>>,
    fail_next_get: Mutex<Option<ApiError>>,
}

impl MockDnsClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            zones: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            mutating_calls: Mutex::new(Vec::new()),
            fail_next_get: Mutex::new(None),
        })
    }

    /// Insert a record directly, bypassing the journal (test arrangement).
    pub fn seed(&self, zone: &str, record: &DnsRecord) {
        self.records
            .lock()
            .expect("mock lock")
            .push((zone.to_string(), record.clone()));
    }

    /// Insert a zone directly, bypassing the journal.
    pub fn seed_zone(&self, zone: &DnsZone) {
        self.zones.lock().expect("mock lock").push(zone.clone());
    }

    /// Drop every record (simulates out-of-band deletion).
    pub fn clear(&self) {
        self.records.lock().expect("mock lock").clear();
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().expect("mock lock").len()
    }

    pub fn records_for(&self, zone: &str, name: &str) -> Vec<DnsRecord> {
        self.records
            .lock()
            .expect("mock lock")
            .iter()
            .filter(|(z, r)| z == zone && r.name == name)
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn zone_names(&self) -> Vec<String> {
        self.zones
            .lock()
            .expect("mock lock")
            .iter()
            .map(|z| z.name.clone())
            .collect()
    }

    /// Every call made, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock lock").clone()
    }

    /// Only the mutating calls, in order.
    pub fn mutations(&self) -> Vec<String> {
        self.mutating_calls.lock().expect("mock lock").clone()
    }

    /// Make the next `get_records` fail with the given error.
    pub fn fail_next_get(&self, error: ApiError) {
        *self.fail_next_get.lock().expect("mock lock") = Some(error);
    }

    fn journal(&self, call: String, mutating: bool) {
        self.calls.lock().expect("mock lock").push(call.clone());
        if mutating {
            self.mutating_calls.lock().expect("mock lock").push(call);
        }
    }
}

#[async_trait]
impl DnsApiClient for MockDnsClient {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn get_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>> {
        self.journal(format!("get {rtype} {name}"), false);
        if let Some(error) = self.fail_next_get.lock().expect("mock lock").take() {
            return Err(error);
        }
        Ok(self
            .records
            .lock()
            .expect("mock lock")
            .iter()
            .filter(|(z, r)| z == zone && r.record_type() == *rtype && r.name == name)
            .map(|(_, r)| r.clone())
            .collect())
    }

    async fn add_record(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        {
            let records = self.records.lock().expect("mock lock");
            // overwrite-off semantics: an existing record with the same key
            // is the server's uniqueness violation
            if records
                .iter()
                .any(|(z, r)| z == zone && r.same_key(record))
            {
                return Err(ApiError::RecordExists {
                    provider: "mock".to_string(),
                    record_name: record.name.clone(),
                    raw_message: None,
                });
            }
        }
        self.journal(
            format!("add {} {}", record.record_type(), record.name),
            true,
        );
        self.records
            .lock()
            .expect("mock lock")
            .push((zone.to_string(), record.clone()));
        Ok(())
    }

    async fn set_records(
        &self,
        zone: &str,
        rtype: &RecordType,
        name: &str,
        records: &[UpdateRecord],
    ) -> Result<()> {
        self.journal(format!("set {rtype} {name} x{}", records.len()), true);
        let mut store = self.records.lock().expect("mock lock");
        store.retain(|(z, r)| !(z == zone && r.record_type() == *rtype && r.name == name));
        for update in records {
            store.push((
                zone.to_string(),
                DnsRecord::new(name, update.ttl, update.data.clone()),
            ));
        }
        Ok(())
    }

    async fn delete_records(&self, zone: &str, rtype: &RecordType, name: &str) -> Result<()> {
        self.journal(format!("delete {rtype} {name}"), true);
        self.records
            .lock()
            .expect("mock lock")
            .retain(|(z, r)| !(z == zone && r.record_type() == *rtype && r.name == name));
        Ok(())
    }

    async fn list_zones(&self) -> Result<Vec<DnsZone>> {
        self.journal("list_zones".to_string(), false);
        Ok(self.zones.lock().expect("mock lock").clone())
    }

    async fn create_zone(&self, zone: &DnsZone) -> Result<()> {
        {
            let zones = self.zones.lock().expect("mock lock");
            if zones.iter().any(|z| z.name == zone.name) {
                return Err(ApiError::ZoneExists {
                    provider: "mock".to_string(),
                    zone: zone.name.clone(),
                    raw_message: None,
                });
            }
        }
        self.journal(format!("create_zone {}", zone.name), true);
        self.zones.lock().expect("mock lock").push(zone.clone());
        Ok(())
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<()> {
        {
            let zones = self.zones.lock().expect("mock lock");
            if !zones.iter().any(|z| z.name == zone_name) {
                return Err(ApiError::ZoneNotFound {
                    provider: "mock".to_string(),
                    zone: zone_name.to_string(),
                    raw_message: None,
                });
            }
        }
        self.journal(format!("delete_zone {zone_name}"), true);
        self.zones
            .lock()
            .expect("mock lock")
            .retain(|z| z.name != zone_name);
        Ok(())
    }
}
