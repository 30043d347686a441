// Shared test helpers for ledger setup and test data creation.

use std::sync::Arc;

use visitor_status::storage::{
    init_db_pool_with_path, run_migrations, VisitorLedger, VisitorRecord,
};

/// Creates a migrated ledger backed by a scratch database inside `dir`.
#[allow(dead_code)] // Used by other test files
pub async fn scratch_ledger(dir: &tempfile::TempDir) -> VisitorLedger {
    let db_path = dir.path().join("visitors.db");
    let pool = init_db_pool_with_path(&db_path)
        .await
        .expect("pool init failed");
    run_migrations(&pool).await.expect("migrations failed");
    VisitorLedger::new(Arc::clone(&pool))
}

/// A fully populated record for round-trip assertions.
#[allow(dead_code)] // Used by other test files
pub fn sample_record(id: &str, city: &str, country: &str, timestamp: i64) -> VisitorRecord {
    VisitorRecord {
        id: id.to_string(),
        network_address: "203.0.113.9".to_string(),
        city: city.to_string(),
        country: country.to_string(),
        latitude: 14.5995,
        longitude: 120.9842,
        timestamp,
        is_blocked: false,
        operating_system: Some("Windows 10/11".to_string()),
        browser: Some("Chrome".to_string()),
        browser_version: Some("120.0.0.0".to_string()),
        device: Some("Desktop".to_string()),
        device_type: Some("Windows PC".to_string()),
        model: Some("Windows PC".to_string()),
    }
}
