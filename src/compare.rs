//! Period comparison: joins two normalized tables and derives deltas.
//!
//! With dimensions, the tables are full-outer-joined on the key tuple and a
//! key missing on one side compares against zeros. Without dimensions, each
//! table collapses to a single totals row first.

use std::collections::{HashMap, HashSet};

use crate::models::{
    ComparisonRow, DateRange, Dimension, MetricRecord, NormalizedTable, Outcome, PeriodComparison,
};

/// Compare `current` against `previous`.
///
/// Returns [`Outcome::NoData`] when both tables are empty. Rows are ordered
/// by `clicks_current` descending; ties keep join order (current-table order,
/// then keys only seen in `previous`).
pub fn compare_periods(
    current: &NormalizedTable,
    previous: &NormalizedTable,
    dimensions: &[Dimension],
    current_range: DateRange,
    previous_range: DateRange,
) -> Outcome<PeriodComparison> {
    if current.is_empty() && previous.is_empty() {
        return Outcome::NoData;
    }

    let mut rows = if dimensions.is_empty() {
        vec![ComparisonRow::from_pair(
            Vec::new(),
            &current.collapse(),
            &previous.collapse(),
        )]
    } else {
        outer_join(current, previous, dimensions.len())
    };

    rows.sort_by(|a, b| b.clicks_current.cmp(&a.clicks_current));

    Outcome::Data(PeriodComparison {
        current: current_range,
        previous: previous_range,
        dimensions: dimensions.to_vec(),
        rows,
    })
}

/// Full outer join on the key tuple.
fn outer_join(current: &NormalizedTable, previous: &NormalizedTable, width: usize) -> Vec<ComparisonRow> {
    let zero = MetricRecord::new(vec![None; width], 0, 0, 0.0, 0.0);

    let previous_by_key: HashMap<&[Option<String>], &MetricRecord> = previous
        .records
        .iter()
        .map(|r| (r.keys.as_slice(), r))
        .collect();

    let mut rows = Vec::with_capacity(current.len() + previous.len());

    for cur in &current.records {
        let prev = previous_by_key.get(cur.keys.as_slice()).copied().unwrap_or(&zero);
        rows.push(ComparisonRow::from_pair(cur.keys.clone(), cur, prev));
    }

    let current_keys: HashSet<&[Option<String>]> =
        current.records.iter().map(|r| r.keys.as_slice()).collect();

    for prev in &previous.records {
        if !current_keys.contains(prev.keys.as_slice()) {
            rows.push(ComparisonRow::from_pair(prev.keys.clone(), &zero, prev));
        }
    }

    rows
}
