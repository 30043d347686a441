//! Visit ingestion.
//!
//! Composes the fingerprint and location resolvers into a VisitorRecord
//! and appends it to the ledger, gated by the per-session guard. No
//! failure on this path propagates: tracking must never affect the page
//! that triggered it.

use std::sync::Arc;

use rand::distr::Alphanumeric;
use rand::Rng;

use super::guard::IngestionGuard;
use crate::config::RANDOM_ID_LEN;
use crate::fingerprint::{self, DeviceDescriptor};
use crate::location::{self, LocationResult, LookupTier};
use crate::storage::{VisitorLedger, VisitorRecord};

/// Everything needed to ingest one visit.
pub struct Tracker {
    client: Arc<reqwest::Client>,
    tiers: Vec<LookupTier>,
    ledger: VisitorLedger,
    guard: IngestionGuard,
}

impl Tracker {
    pub fn new(
        client: Arc<reqwest::Client>,
        tiers: Vec<LookupTier>,
        ledger: VisitorLedger,
        guard: IngestionGuard,
    ) -> Self {
        Self {
            client,
            tiers,
            ledger,
            guard,
        }
    }

    /// Ingests one visit for the given session.
    ///
    /// The fingerprint and location resolvers have no ordering dependency
    /// on each other; the location lookup is the only suspension point.
    /// The session is marked tracked only after the record is persisted,
    /// so a failed write is retried on the session's next page view.
    pub async fn track_visit(&self, session_id: &str, signature: &str) {
        if !self.guard.should_track(session_id) {
            log::debug!("session '{session_id}' already tracked, skipping");
            return;
        }

        let descriptor = fingerprint::resolve(signature);
        let location = location::resolve_location(&self.client, &self.tiers).await;
        let record = build_record(location, descriptor);

        match self.ledger.append(&record).await {
            Ok(()) => {
                self.guard.mark_tracked(session_id);
                log::info!(
                    "tracked visitor {} from {}, {}",
                    record.id,
                    record.city,
                    record.country
                );
            }
            Err(e) => {
                // Visitor experience must never be affected by tracking failure
                log::error!("failed to persist visitor record: {e}");
            }
        }
    }
}

/// Combines resolver outputs into a fresh record.
pub(crate) fn build_record(
    location: LocationResult,
    descriptor: DeviceDescriptor,
) -> VisitorRecord {
    let now = chrono::Utc::now().timestamp_millis();
    VisitorRecord {
        id: generate_id(now),
        network_address: location.network_address,
        city: location.city,
        country: location.country,
        latitude: location.latitude,
        longitude: location.longitude,
        timestamp: now,
        is_blocked: false,
        operating_system: Some(descriptor.operating_system),
        browser: Some(descriptor.browser),
        browser_version: if descriptor.browser_version.is_empty() {
            None
        } else {
            Some(descriptor.browser_version)
        },
        device: Some(descriptor.device),
        device_type: Some(descriptor.device_type),
        model: Some(descriptor.model),
    }
}

/// Generates an opaque record id: `visitor_<millis>_<random>`.
fn generate_id(now_millis: i64) -> String {
    format!("visitor_{}_{}", now_millis, random_suffix(RANDOM_ID_LEN))
}

/// Generates a fresh browsing-session id for the session cookie.
pub fn new_session_id() -> String {
    format!(
        "sess_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(RANDOM_ID_LEN)
    )
}

fn random_suffix(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}
