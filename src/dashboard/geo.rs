//! Map view data: one point per record plus a viewport-fitting bounding box.

use serde::Serialize;

use crate::storage::VisitorRecord;

/// One visitor rendered on the map. Blocked visitors carry the flag so the
/// client can distinguish them visually.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub blocked: bool,
    /// "City, Country" label for the marker popup
    pub label: String,
}

/// Bounding region of all currently visible points, used by the client to
/// auto-fit its viewport when the visitor set changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Projects ledger records into map points and their bounding region.
///
/// Every record has resolvable coordinates by construction (0,0 is a valid
/// default, not an error), so every record becomes a point. The bounds are
/// `None` only when there are no points at all.
pub fn geo_points(visitors: &[VisitorRecord]) -> (Vec<GeoPoint>, Option<Bounds>) {
    let points: Vec<GeoPoint> = visitors
        .iter()
        .map(|v| GeoPoint {
            id: v.id.clone(),
            latitude: v.latitude,
            longitude: v.longitude,
            blocked: v.is_blocked,
            label: format!("{}, {}", v.city, v.country),
        })
        .collect();

    let bounds = fit_bounds(&points);
    (points, bounds)
}

fn fit_bounds(points: &[GeoPoint]) -> Option<Bounds> {
    let first = points.first()?;
    let mut bounds = Bounds {
        min_latitude: first.latitude,
        max_latitude: first.latitude,
        min_longitude: first.longitude,
        max_longitude: first.longitude,
    };
    for p in &points[1..] {
        bounds.min_latitude = bounds.min_latitude.min(p.latitude);
        bounds.max_latitude = bounds.max_latitude.max(p.latitude);
        bounds.min_longitude = bounds.min_longitude.min(p.longitude);
        bounds.max_longitude = bounds.max_longitude.max(p.longitude);
    }
    Some(bounds)
}
