use serde::{Deserialize, Serialize};

use super::enums::Dimension;

// ---------------------------------------------------------------------------
// MetricRecord — One normalized row: dimension values plus four metrics
// ---------------------------------------------------------------------------

/// A normalized result row.
///
/// `keys` holds one slot per requested dimension, in request order. A `None`
/// slot means the upstream row carried fewer keys than were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub keys: Vec<Option<String>>,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

impl MetricRecord {
    pub fn new(keys: Vec<Option<String>>, clicks: u64, impressions: u64, ctr: f64, position: f64) -> Self {
        Self {
            keys,
            clicks,
            impressions,
            ctr,
            position,
        }
    }

    /// A record with no dimension values, as produced for totals queries.
    pub fn totals(clicks: u64, impressions: u64, ctr: f64, position: f64) -> Self {
        Self::new(Vec::new(), clicks, impressions, ctr, position)
    }
}

// ---------------------------------------------------------------------------
// NormalizedTable — Ordered records sharing one dimension schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    pub dimensions: Vec<Dimension>,
    pub records: Vec<MetricRecord>,
}

impl NormalizedTable {
    pub fn new(dimensions: Vec<Dimension>, records: Vec<MetricRecord>) -> Self {
        Self {
            dimensions,
            records,
        }
    }

    pub fn empty(dimensions: &[Dimension]) -> Self {
        Self::new(dimensions.to_vec(), Vec::new())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collapse the table into a single totals record.
    ///
    /// Clicks and impressions are summed; ctr and position are the plain
    /// arithmetic mean over rows (not weighted by impressions). An empty
    /// table collapses to all zeros.
    pub fn collapse(&self) -> MetricRecord {
        if self.records.is_empty() {
            return MetricRecord::totals(0, 0, 0.0, 0.0);
        }
        let n = self.records.len() as f64;
        let clicks = self.records.iter().map(|r| r.clicks).sum();
        let impressions = self.records.iter().map(|r| r.impressions).sum();
        let ctr = self.records.iter().map(|r| r.ctr).sum::<f64>() / n;
        let position = self.records.iter().map(|r| r.position).sum::<f64>() / n;
        MetricRecord::totals(clicks, impressions, ctr, position)
    }
}
