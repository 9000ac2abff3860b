//! Shared helpers for the live-server integration tests.

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_steward_provider::{
    DnsApiClient, DnsRecord, ProviderCredentials, ProviderKind, RecordData, RecordType,
    create_client,
};

/// Skip the test when the listed environment variables are absent.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing env var {}", $var);
                return;
            }
        )+
    };
}

/// Assert a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Generate a unique test record name.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Generate an SRV-shaped test name (`_service._tcp` form).
pub fn generate_srv_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}._tcp", &uuid.to_string()[..8])
}

/// Test context wrapping a client and the zone under test.
pub struct TestContext {
    pub client: Arc<dyn DnsApiClient>,
    pub zone: String,
}

impl TestContext {
    /// Build a Technitium context from the environment.
    pub fn technitium() -> Option<Self> {
        let credentials = ProviderCredentials::from_env(&ProviderKind::Technitium).ok()?;
        let zone = env::var("TEST_ZONE").ok()?;
        let client = create_client(credentials).ok()?;
        Some(Self { client, zone })
    }

    /// Build a GoDaddy context from the environment.
    pub fn godaddy() -> Option<Self> {
        let credentials = ProviderCredentials::from_env(&ProviderKind::Godaddy).ok()?;
        let zone = env::var("TEST_ZONE").ok()?;
        let client = create_client(credentials).ok()?;
        Some(Self { client, zone })
    }

    /// Create a TXT test record and return it.
    pub async fn create_test_record(&self) -> Option<DnsRecord> {
        let record = DnsRecord::new(generate_test_record_name(), 3600, RecordData::TXT {
            text: "integration-test".to_string(),
            split_text: false,
        });
        self.client.add_record(&self.zone, &record).await.ok()?;
        Some(record)
    }

    /// Remove every record for the given record's type+name.
    pub async fn cleanup_record(&self, record: &DnsRecord) {
        let _ = self
            .client
            .delete_records(&self.zone, &record.record_type(), &record.name)
            .await;
    }

    /// Delete leftover `_test-` records of the common test types.
    pub async fn cleanup_all_test_records(&self, names: &[String]) {
        for name in names {
            for rtype in [RecordType::A, RecordType::TXT, RecordType::MX] {
                let _ = self.client.delete_records(&self.zone, &rtype, name).await;
            }
        }
    }
}
