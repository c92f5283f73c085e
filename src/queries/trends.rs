//! Search trends over time.

use tracing::info;

use crate::aggregate::aggregate;
use crate::client::SearchApi;
use crate::config;
use crate::error::Result;
use crate::models::{
    DateRange, Dimension, Interval, Outcome, SearchAnalyticsRequest, SearchType, TrendBucket,
};
use crate::normalize::normalize;

/// Query interface for date-bucketed trend series.
pub struct TrendQuery<'a> {
    api: &'a dyn SearchApi,
}

impl<'a> TrendQuery<'a> {
    pub fn new(api: &'a dyn SearchApi) -> Self {
        Self { api }
    }

    /// Fetch daily web rows for `range` and bucket them by `interval`.
    pub fn trends(
        &self,
        site_url: &str,
        range: &DateRange,
        interval: Interval,
    ) -> Result<Outcome<Vec<TrendBucket>>> {
        let dimensions = [Dimension::Date];
        let request = SearchAnalyticsRequest::new(&range.start, &range.end)
            .dimensions(&dimensions)
            .search_type(SearchType::Web)
            .row_limit(config::REPORT_ROW_LIMIT);

        info!(site_url, %interval, "fetching search trends");
        let response = self.api.query(site_url, &request)?;
        if response.is_empty() {
            return Ok(Outcome::NoData);
        }

        let table = normalize(&response, &dimensions);
        Ok(Outcome::Data(aggregate(&table, interval)?))
    }
}
