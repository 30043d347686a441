//! Server state and response/request payloads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::AdminCredentials;
use crate::dashboard::{Bounds, Dashboard, GeoPoint};
use crate::ingest::Tracker;
use crate::storage::{VisitorLedger, VisitorRecord};

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,
    pub ledger: VisitorLedger,
    pub dashboard: Arc<Dashboard>,
    pub credentials: Arc<AdminCredentials>,
}

/// Query parameters for the table view.
#[derive(Debug, Default, Deserialize)]
pub struct VisitorsQuery {
    /// Free-text filter; empty or absent returns every row
    #[serde(default)]
    pub filter: String,
}

/// JSON response for `GET /api/visitors`.
#[derive(Serialize)]
pub struct VisitorsResponse {
    pub visitors: Vec<VisitorRecord>,
    pub total: usize,
}

/// JSON response for `GET /api/visitors/geo`.
#[derive(Serialize)]
pub struct GeoResponse {
    pub points: Vec<GeoPoint>,
    /// Bounding region for viewport auto-fit; absent when there are no points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

/// Request body for `PUT /api/credentials`.
#[derive(Debug, Deserialize)]
pub struct UpdateCredentialsRequest {
    pub username: String,
    pub password: String,
}
