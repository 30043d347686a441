//! Aggregation & access view over the visitor ledger.
//!
//! Holds a shared [`Stats`] snapshot that a background refresher recomputes
//! from the ledger on a fixed interval. Block/unblock commands mutate the
//! ledger and force an immediate refresh so the next read reflects the
//! change without waiting for the timer.

mod geo;
mod stats;
mod table;

pub use geo::{geo_points, Bounds, GeoPoint};
pub use stats::{compute_stats, Stats, NO_VISITORS_YET};
pub use table::filter_visitors;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error_handling::DatabaseError;
use crate::storage::VisitorLedger;

/// Live aggregation view: the ledger handle plus the latest stats snapshot.
pub struct Dashboard {
    ledger: VisitorLedger,
    snapshot: RwLock<Stats>,
}

impl Dashboard {
    pub fn new(ledger: VisitorLedger) -> Self {
        Self {
            ledger,
            snapshot: RwLock::new(Stats::default()),
        }
    }

    /// The most recently computed stats.
    pub fn snapshot(&self) -> Stats {
        self.snapshot
            .read()
            .expect("stats snapshot lock poisoned")
            .clone()
    }

    /// Recomputes stats from a full ledger listing and stores the snapshot.
    pub async fn refresh(&self) -> Result<Stats, DatabaseError> {
        let visitors = self.ledger.list().await?;
        let stats = compute_stats(&visitors);
        *self
            .snapshot
            .write()
            .expect("stats snapshot lock poisoned") = stats.clone();
        Ok(stats)
    }

    /// Blocks or unblocks a record, then refreshes immediately.
    ///
    /// An unknown id is a logged no-op inside the ledger; the refresh still
    /// runs so the snapshot converges with whatever the ledger now holds.
    pub async fn set_blocked(&self, id: &str, blocked: bool) -> Result<(), DatabaseError> {
        self.ledger.set_blocked(id, blocked).await?;
        self.refresh().await?;
        Ok(())
    }
}

/// Spawns the background refresher: recompute every `period` until the
/// token is cancelled. Cancellation stops the timer for good; no recurring
/// work leaks past teardown.
pub fn spawn_refresher(
    dashboard: Arc<Dashboard>,
    period: Duration,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = dashboard.refresh().await {
                        log::warn!("dashboard refresh failed: {e}");
                    }
                }
                _ = cancel.cancelled() => {
                    log::debug!("dashboard refresher stopped");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::storage::VisitorRecord;

    /// Minimal record for view-layer tests.
    pub fn record(id: &str, city: &str, country: &str, timestamp: i64) -> VisitorRecord {
        VisitorRecord {
            id: id.to_string(),
            network_address: "203.0.113.9".to_string(),
            city: city.to_string(),
            country: country.to_string(),
            latitude: 0.0,
            longitude: 0.0,
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
}
