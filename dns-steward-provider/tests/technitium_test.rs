//! Technitium client integration tests against a live server.
//!
//! Run with:
//! ```bash
//! TECHNITIUM_API_URL=https://dns.local:5380 TECHNITIUM_API_TOKEN=xxx TEST_ZONE=example.com \
//!     cargo test -p dns-steward-provider --test technitium_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use dns_steward_provider::{DnsRecord, DnsZone, RecordData, RecordType, ZoneType};

#[tokio::test]
#[ignore]
async fn test_technitium_list_zones() {
    skip_if_no_credentials!("TECHNITIUM_API_URL", "TECHNITIUM_API_TOKEN", "TEST_ZONE");

    let Some(ctx) = TestContext::technitium() else {
        return;
    };
    let zones = require_ok!(ctx.client.list_zones().await);
    assert!(
        zones.iter().any(|z| z.name == ctx.zone),
        "test zone not present in zone list"
    );
}

#[tokio::test]
#[ignore]
async fn test_technitium_record_roundtrip() {
    skip_if_no_credentials!("TECHNITIUM_API_URL", "TECHNITIUM_API_TOKEN", "TEST_ZONE");

    let Some(ctx) = TestContext::technitium() else {
        return;
    };
    let name = common::generate_test_record_name();
    let record = DnsRecord::new(name.as_str(), 3600, RecordData::A {
        address: "192.0.2.10".to_string(),
    });

    require_ok!(ctx.client.add_record(&ctx.zone, &record).await);

    let live = require_ok!(ctx.client.get_records(&ctx.zone, &RecordType::A, &name).await);
    assert_eq!(live.len(), 1);
    assert!(live[0].same_key(&record));

    ctx.cleanup_record(&record).await;

    let after = require_ok!(ctx.client.get_records(&ctx.zone, &RecordType::A, &name).await);
    assert!(after.is_empty(), "record not cleaned up");
}

#[tokio::test]
#[ignore]
async fn test_technitium_set_records_preserves_siblings() {
    skip_if_no_credentials!("TECHNITIUM_API_URL", "TECHNITIUM_API_TOKEN", "TEST_ZONE");

    let Some(ctx) = TestContext::technitium() else {
        return;
    };
    let name = common::generate_test_record_name();
    let txt = |text: &str| {
        DnsRecord::new(name.as_str(), 3600, RecordData::TXT {
            text: text.to_string(),
            split_text: false,
        })
    };

    require_ok!(ctx.client.add_record(&ctx.zone, &txt("one")).await);
    require_ok!(ctx.client.add_record(&ctx.zone, &txt("two")).await);

    // replace the set with "one" + "three": "two" goes, "one" stays
    let desired = vec![txt("one").to_update(), txt("three").to_update()];
    require_ok!(
        ctx.client
            .set_records(&ctx.zone, &RecordType::TXT, &name, &desired)
            .await
    );

    let live = require_ok!(
        ctx.client
            .get_records(&ctx.zone, &RecordType::TXT, &name)
            .await
    );
    let texts: Vec<&str> = live
        .iter()
        .filter_map(|r| match &r.data {
            RecordData::TXT { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(live.len(), 2);
    assert!(texts.contains(&"one"));
    assert!(texts.contains(&"three"));

    ctx.cleanup_record(&txt("one")).await;
}

#[tokio::test]
#[ignore]
async fn test_technitium_zone_lifecycle() {
    skip_if_no_credentials!("TECHNITIUM_API_URL", "TECHNITIUM_API_TOKEN", "TEST_ZONE");

    let Some(ctx) = TestContext::technitium() else {
        return;
    };
    let zone_name = format!("{}.{}", common::generate_test_record_name(), ctx.zone);
    let zone = DnsZone::new(zone_name.as_str(), ZoneType::Primary);

    require_ok!(ctx.client.create_zone(&zone).await);

    let zones = require_ok!(ctx.client.list_zones().await);
    let created = zones.iter().find(|z| z.name == zone_name);
    assert!(created.is_some(), "created zone not listed");
    if let Some(z) = created {
        assert_eq!(z.zone_type, Some(ZoneType::Primary));
    }

    require_ok!(ctx.client.delete_zone(&zone_name).await);
}
