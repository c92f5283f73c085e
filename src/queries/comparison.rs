//! Period-over-period comparison of search analytics.

use tracing::info;

use crate::client::SearchApi;
use crate::compare::compare_periods;
use crate::config;
use crate::error::Result;
use crate::models::{
    DateRange, Dimension, Outcome, PeriodComparison, SearchAnalyticsRequest, SearchType,
};
use crate::normalize::normalize;
use crate::validation;

// ---------------------------------------------------------------------------
// ComparisonParams
// ---------------------------------------------------------------------------

/// Parameters for comparing two reporting periods of the same site.
#[derive(Debug, Clone)]
pub struct ComparisonParams {
    pub site_url: String,
    pub current: DateRange,
    pub previous: DateRange,
    pub dimensions: Vec<Dimension>,
    pub search_type: SearchType,
    pub row_limit: u32,
}

impl ComparisonParams {
    pub fn new(site_url: &str, current: DateRange, previous: DateRange) -> Self {
        Self {
            site_url: site_url.to_string(),
            current,
            previous,
            dimensions: Vec::new(),
            search_type: SearchType::Web,
            row_limit: config::DEFAULT_ROW_LIMIT,
        }
    }

    pub fn dimensions(mut self, dimensions: &[Dimension]) -> Self {
        self.dimensions = dimensions.to_vec();
        self
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn row_limit(mut self, row_limit: u32) -> Self {
        self.row_limit = row_limit;
        self
    }
}

// ---------------------------------------------------------------------------
// ComparisonQuery
// ---------------------------------------------------------------------------

/// Query interface that fetches two periods and compares them.
pub struct ComparisonQuery<'a> {
    api: &'a dyn SearchApi,
}

impl<'a> ComparisonQuery<'a> {
    pub fn new(api: &'a dyn SearchApi) -> Self {
        Self { api }
    }

    /// Fetch the current then the previous period and join them.
    ///
    /// Returns [`Outcome::NoData`] when neither period has rows.
    pub fn compare(&self, params: &ComparisonParams) -> Result<Outcome<PeriodComparison>> {
        let row_limit = validation::row_limit(i64::from(params.row_limit))?;
        let request_for = |range: &DateRange| {
            SearchAnalyticsRequest::new(&range.start, &range.end)
                .dimensions(&params.dimensions)
                .search_type(params.search_type)
                .row_limit(row_limit)
        };

        info!(
            site_url = %params.site_url,
            current = %format!("{}..{}", params.current.start, params.current.end),
            previous = %format!("{}..{}", params.previous.start, params.previous.end),
            "comparing periods"
        );
        let current = self.api.query(&params.site_url, &request_for(&params.current))?;
        let previous = self.api.query(&params.site_url, &request_for(&params.previous))?;

        Ok(compare_periods(
            &normalize(&current, &params.dimensions),
            &normalize(&previous, &params.dimensions),
            &params.dimensions,
            params.current.clone(),
            params.previous.clone(),
        ))
    }
}
