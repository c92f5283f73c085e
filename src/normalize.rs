//! Conversion of raw searchAnalytics rows into a [`NormalizedTable`].

use crate::models::{ApiRow, Dimension, MetricRecord, NormalizedTable, SearchAnalyticsResponse};

/// Normalize a raw response against the requested dimension list.
///
/// An absent or empty `rows` field yields an empty table. Missing metrics
/// read as 0. Key lists shorter than `dimensions` are padded with `None`;
/// surplus keys are dropped.
pub fn normalize(response: &SearchAnalyticsResponse, dimensions: &[Dimension]) -> NormalizedTable {
    let records = response
        .rows()
        .iter()
        .map(|row| normalize_row(row, dimensions.len()))
        .collect();
    NormalizedTable::new(dimensions.to_vec(), records)
}

fn normalize_row(row: &ApiRow, width: usize) -> MetricRecord {
    let keys = (0..width).map(|i| row.keys.get(i).cloned()).collect();
    MetricRecord::new(
        keys,
        to_count(row.clicks),
        to_count(row.impressions),
        row.ctr.unwrap_or(0.0),
        row.position.unwrap_or(0.0),
    )
}

/// Counts arrive as JSON numbers; round and clamp to a non-negative integer.
fn to_count(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}
