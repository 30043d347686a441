//! Derived ledger statistics.

use std::collections::HashSet;

use serde::Serialize;

use crate::storage::VisitorRecord;

/// Shown when the ledger has no records yet.
pub const NO_VISITORS_YET: &str = "No visitors yet";

/// Aggregate statistics over the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_visitors: usize,
    pub blocked_visitors: usize,
    /// Count of distinct `country` values
    pub unique_countries: usize,
    /// Most recent visit, formatted for display
    pub last_visit: String,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_visitors: 0,
            blocked_visitors: 0,
            unique_countries: 0,
            last_visit: NO_VISITORS_YET.to_string(),
        }
    }
}

/// Recomputes the aggregate view from a full ledger listing.
pub fn compute_stats(visitors: &[VisitorRecord]) -> Stats {
    let blocked_visitors = visitors.iter().filter(|v| v.is_blocked).count();
    let unique_countries = visitors
        .iter()
        .map(|v| v.country.as_str())
        .collect::<HashSet<_>>()
        .len();
    let last_visit = visitors
        .iter()
        .map(|v| v.timestamp)
        .max()
        .and_then(format_timestamp)
        .unwrap_or_else(|| NO_VISITORS_YET.to_string());

    Stats {
        total_visitors: visitors.len(),
        blocked_visitors,
        unique_countries,
        last_visit,
    }
}

fn format_timestamp(millis: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
