//! Raw searchAnalytics queries, normalized into a table.

use tracing::info;

use crate::client::SearchApi;
use crate::config;
use crate::error::Result;
use crate::models::{Dimension, NormalizedTable, Outcome, SearchAnalyticsRequest, SearchType};
use crate::normalize::normalize;
use crate::validation;

// ---------------------------------------------------------------------------
// AnalyticsParams
// ---------------------------------------------------------------------------

/// Parameters for a single searchAnalytics query.
#[derive(Debug, Clone)]
pub struct AnalyticsParams {
    pub site_url: String,
    pub start_date: String,
    pub end_date: String,
    pub dimensions: Vec<Dimension>,
    pub search_type: SearchType,
    pub row_limit: u32,
}

impl AnalyticsParams {
    /// Params with no dimensions, `web` search and the default row limit.
    pub fn new(site_url: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            site_url: site_url.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
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
// AnalyticsQuery
// ---------------------------------------------------------------------------

/// Query interface for raw search analytics rows.
pub struct AnalyticsQuery<'a> {
    api: &'a dyn SearchApi,
}

impl<'a> AnalyticsQuery<'a> {
    /// Create a new `AnalyticsQuery` bound to the given API handle.
    pub fn new(api: &'a dyn SearchApi) -> Self {
        Self { api }
    }

    /// Run the query and normalize the rows.
    ///
    /// Returns [`Outcome::NoData`] when the API reports no rows.
    pub fn query(&self, params: &AnalyticsParams) -> Result<Outcome<NormalizedTable>> {
        let row_limit = validation::row_limit(i64::from(params.row_limit))?;
        let request = SearchAnalyticsRequest::new(&params.start_date, &params.end_date)
            .dimensions(&params.dimensions)
            .search_type(params.search_type)
            .row_limit(row_limit);

        info!(site_url = %params.site_url, "querying search analytics");
        let response = self.api.query(&params.site_url, &request)?;
        if response.is_empty() {
            return Ok(Outcome::NoData);
        }
        Ok(Outcome::Data(normalize(&response, &params.dimensions)))
    }
}
