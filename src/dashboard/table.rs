//! Table view: free-text filtering and recency ordering.

use crate::storage::VisitorRecord;

/// Filters and orders ledger rows for the table view.
///
/// The filter is a case-insensitive substring match, OR-combined across
/// the address, location, and descriptor fields. Rows are always ordered
/// most-recent-first regardless of the filter.
pub fn filter_visitors(visitors: &[VisitorRecord], filter: &str) -> Vec<VisitorRecord> {
    let needle = filter.trim().to_lowercase();
    let mut rows: Vec<VisitorRecord> = if needle.is_empty() {
        visitors.to_vec()
    } else {
        visitors
            .iter()
            .filter(|v| matches_filter(v, &needle))
            .cloned()
            .collect()
    };
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows
}

fn matches_filter(visitor: &VisitorRecord, needle: &str) -> bool {
    let fields = [
        visitor.network_address.as_str(),
        visitor.city.as_str(),
        visitor.country.as_str(),
        visitor.operating_system.as_deref().unwrap_or(""),
        visitor.browser.as_deref().unwrap_or(""),
        visitor.model.as_deref().unwrap_or(""),
        visitor.device_type.as_deref().unwrap_or(""),
    ];
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
