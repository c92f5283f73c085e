//! Top-performing pages ranked by a single metric.

use std::cmp::Ordering;

use tracing::info;

use crate::client::SearchApi;
use crate::config;
use crate::error::Result;
use crate::models::{
    ApiRow, DateRange, Dimension, Metric, Outcome, SearchAnalyticsRequest, SearchType, TopPage,
};

/// Query interface for page rankings.
pub struct TopContentQuery<'a> {
    api: &'a dyn SearchApi,
}

impl<'a> TopContentQuery<'a> {
    pub fn new(api: &'a dyn SearchApi) -> Self {
        Self { api }
    }

    /// Return the `limit` best pages for `metric` over `range`.
    ///
    /// Pulls up to 1000 web rows by page, then ranks locally: ascending for
    /// `position`, descending otherwise. Missing metric values rank as 0.
    pub fn top_pages(
        &self,
        site_url: &str,
        range: &DateRange,
        metric: Metric,
        limit: usize,
    ) -> Result<Outcome<Vec<TopPage>>> {
        let request = SearchAnalyticsRequest::new(&range.start, &range.end)
            .dimensions(&[Dimension::Page])
            .search_type(SearchType::Web)
            .row_limit(config::REPORT_ROW_LIMIT);

        info!(site_url, %metric, limit, "ranking top pages");
        let response = self.api.query(site_url, &request)?;
        if response.is_empty() {
            return Ok(Outcome::NoData);
        }

        Ok(Outcome::Data(rank_rows(response.rows(), metric, limit)))
    }
}

/// Stable sort of raw rows by `metric`, keeping the first `limit`.
pub fn rank_rows(rows: &[ApiRow], metric: Metric, limit: usize) -> Vec<TopPage> {
    let mut ranked: Vec<&ApiRow> = rows.iter().collect();
    ranked.sort_by(|a, b| {
        let (a, b) = (a.metric(metric), b.metric(metric));
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        if metric.lower_is_better() {
            ord
        } else {
            ord.reverse()
        }
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|row| TopPage {
            page: row.keys.first().cloned().unwrap_or_default(),
            clicks: row.metric(Metric::Clicks),
            impressions: row.metric(Metric::Impressions),
            ctr: row.metric(Metric::Ctr),
            position: row.metric(Metric::Position),
        })
        .collect()
}
