use serde::{Deserialize, Serialize};

use super::enums::Dimension;
use super::record::MetricRecord;

// ---------------------------------------------------------------------------
// DateRange — Inclusive reporting period, passed to the API as-is
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonRow — Current vs previous metrics for one join key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub keys: Vec<Option<String>>,
    pub clicks_current: u64,
    pub clicks_previous: u64,
    pub clicks_change: i64,
    pub clicks_change_pct: f64,
    pub impressions_current: u64,
    pub impressions_previous: u64,
    pub impressions_change: i64,
    pub impressions_change_pct: f64,
    pub ctr_current: f64,
    pub ctr_previous: f64,
    pub ctr_change: f64,
    pub ctr_change_pct: f64,
    pub position_current: f64,
    pub position_previous: f64,
    /// `previous - current`: positive means the page moved up.
    pub position_change: f64,
}

/// Denominator used for click/impression percentages when the previous value is 0.
pub const COUNT_PCT_FALLBACK_DENOM: f64 = 1.0;
/// Denominator used for the ctr percentage when the previous ctr is 0.
pub const CTR_PCT_FALLBACK_DENOM: f64 = 0.01;

impl ComparisonRow {
    /// Build a row from the two sides of a join. An absent side is all zeros.
    pub fn from_pair(keys: Vec<Option<String>>, current: &MetricRecord, previous: &MetricRecord) -> Self {
        let clicks_change = signed_diff(current.clicks, previous.clicks);
        let impressions_change = signed_diff(current.impressions, previous.impressions);
        let ctr_change = current.ctr - previous.ctr;

        Self {
            keys,
            clicks_current: current.clicks,
            clicks_previous: previous.clicks,
            clicks_change,
            clicks_change_pct: pct_change(
                clicks_change as f64,
                previous.clicks as f64,
                COUNT_PCT_FALLBACK_DENOM,
            ),
            impressions_current: current.impressions,
            impressions_previous: previous.impressions,
            impressions_change,
            impressions_change_pct: pct_change(
                impressions_change as f64,
                previous.impressions as f64,
                COUNT_PCT_FALLBACK_DENOM,
            ),
            ctr_current: current.ctr,
            ctr_previous: previous.ctr,
            ctr_change,
            ctr_change_pct: pct_change(ctr_change, previous.ctr, CTR_PCT_FALLBACK_DENOM),
            position_current: current.position,
            position_previous: previous.position,
            position_change: previous.position - current.position,
        }
    }
}

fn signed_diff(current: u64, previous: u64) -> i64 {
    current as i64 - previous as i64
}

fn pct_change(delta: f64, previous: f64, fallback_denom: f64) -> f64 {
    let denom = if previous != 0.0 { previous } else { fallback_denom };
    delta / denom * 100.0
}

// ---------------------------------------------------------------------------
// PeriodComparison — Comparator output plus captions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub current: DateRange,
    pub previous: DateRange,
    pub dimensions: Vec<Dimension>,
    /// Sorted by `clicks_current` descending.
    pub rows: Vec<ComparisonRow>,
}

impl PeriodComparison {
    /// True when the comparison was made over totals (no dimensions).
    pub fn is_totals(&self) -> bool {
        self.dimensions.is_empty()
    }
}
