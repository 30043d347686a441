//! The visitor ledger.
//!
//! Persistent, append-mostly store of [`VisitorRecord`]s. The ledger is the
//! sole owner of record lifetime: records are created by [`append`],
//! mutated only through [`set_blocked`], and never deleted.
//!
//! [`append`]: VisitorLedger::append
//! [`set_blocked`]: VisitorLedger::set_blocked

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error_handling::DatabaseError;

/// One ingested visit.
///
/// `is_blocked` is the only field that changes after creation; everything
/// else is write-once at append time. The optional descriptor fields may
/// each independently be absent; consumers render a fallback label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorRecord {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,
    /// Best-effort public network identifier, or an "unknown" sentinel
    pub network_address: String,
    pub city: String,
    pub country: String,
    /// 0,0 is a valid-but-suspicious default, not an error state
    pub latitude: f64,
    pub longitude: f64,
    /// Creation instant, milliseconds since epoch
    pub timestamp: i64,
    pub is_blocked: bool,
    pub operating_system: Option<String>,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub device: Option<String>,
    pub device_type: Option<String>,
    pub model: Option<String>,
}

/// Handle to the `visitors` collection.
#[derive(Clone)]
pub struct VisitorLedger {
    pool: Arc<SqlitePool>,
}

impl VisitorLedger {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Appends a record to the ledger.
    ///
    /// Never rejects a well-formed record; id uniqueness is the caller's
    /// responsibility (the caller generates a fresh opaque id per record).
    pub async fn append(&self, record: &VisitorRecord) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO visitors (
                id, network_address, city, country, latitude, longitude,
                timestamp, is_blocked, operating_system, browser,
                browser_version, device, device_type, model
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.network_address)
        .bind(&record.city)
        .bind(&record.country)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.timestamp)
        .bind(record.is_blocked)
        .bind(&record.operating_system)
        .bind(&record.browser)
        .bind(&record.browser_version)
        .bind(&record.device)
        .bind(&record.device_type)
        .bind(&record.model)
        .execute(self.pool.as_ref())
        .await?;
        Ok(())
    }

    /// Returns the full collection. Insertion order is not part of the
    /// contract; consumers re-sort.
    pub async fn list(&self) -> Result<Vec<VisitorRecord>, DatabaseError> {
        let rows = sqlx::query("SELECT * FROM visitors")
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows.iter().map(row_to_record).collect())
    }

    /// Sets the blocked flag on a record. Idempotent; a missing id is
    /// logged as a no-op rather than treated as an error, since the
    /// operator's list may have been refreshed concurrently.
    pub async fn set_blocked(&self, id: &str, blocked: bool) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE visitors SET is_blocked = ? WHERE id = ?")
            .bind(blocked)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            log::warn!("set_blocked: no visitor with id '{id}', ignoring");
        }
        Ok(())
    }
}

fn row_to_record(row: &SqliteRow) -> VisitorRecord {
    VisitorRecord {
        id: row.get("id"),
        network_address: row.get("network_address"),
        city: row.get("city"),
        country: row.get("country"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        timestamp: row.get("timestamp"),
        is_blocked: row.get("is_blocked"),
        operating_system: row.get("operating_system"),
        browser: row.get("browser"),
        browser_version: row.get("browser_version"),
        device: row.get("device"),
        device_type: row.get("device_type"),
        model: row.get("model"),
    }
}
