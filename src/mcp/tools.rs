//! The five Search Console tools: argument schemas, validation and execution.
//!
//! Arguments are validated before the client is touched, so bad input never
//! costs a network call. Every tool produces exactly one text item.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    extract::{Json, State},
    CallToolResult, Tool, ToolBuilder,
};

use super::ToolServer;
use crate::config;
use crate::error::Result;
use crate::models::{DateRange, Interval, Metric};
use crate::queries::{AnalyticsParams, ComparisonParams};
use crate::render;
use crate::validation;
use crate::SearchConsole;

pub const LIST_SITES: &str = "list_sites";
pub const QUERY_SEARCH_ANALYTICS: &str = "query_search_analytics";
pub const COMPARE_TIME_PERIODS: &str = "compare_time_periods";
pub const GET_TOP_PERFORMING_CONTENT: &str = "get_top_performing_content";
pub const GET_SEARCH_TRENDS: &str = "get_search_trends";

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

fn default_search_type() -> String {
    "web".to_string()
}

fn default_row_limit() -> i64 {
    i64::from(config::DEFAULT_ROW_LIMIT)
}

fn default_metric() -> String {
    "clicks".to_string()
}

fn default_limit() -> usize {
    config::DEFAULT_TOP_LIMIT
}

fn default_interval() -> String {
    "week".to_string()
}

/// Input for listing verified sites
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListSitesArgs {}

impl ListSitesArgs {
    pub fn into_call(self) -> Result<ToolCall> {
        Ok(ToolCall::ListSites)
    }
}

/// Input for querying search analytics
#[derive(Debug, Deserialize, JsonSchema)]
pub struct QueryArgs {
    /// Full URL of your website (e.g., https://www.example.com/ or sc-domain:example.com)
    pub site_url: String,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// List of dimensions (query, page, device, country, date)
    #[serde(default)]
    pub dimensions: Option<Vec<String>>,
    /// Type of search results (web, image, video, news, discover, googleNews)
    #[serde(default = "default_search_type")]
    pub search_type: String,
    /// Number of rows to return (max 25000)
    #[serde(default = "default_row_limit")]
    pub row_limit: i64,
}

impl QueryArgs {
    /// Validate dimensions, then row limit, then search type.
    pub fn into_call(self) -> Result<ToolCall> {
        let dimensions = validation::dimensions(&self.dimensions.unwrap_or_default())?;
        let row_limit = validation::row_limit(self.row_limit)?;
        let search_type = validation::search_type(&self.search_type)?;
        Ok(ToolCall::QuerySearchAnalytics(
            AnalyticsParams::new(&self.site_url, &self.start_date, &self.end_date)
                .dimensions(&dimensions)
                .search_type(search_type)
                .row_limit(row_limit),
        ))
    }
}

/// Input for comparing two time periods
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompareArgs {
    /// Full URL of your website (e.g., https://www.example.com/ or sc-domain:example.com)
    pub site_url: String,
    /// Start date for current period in YYYY-MM-DD format
    pub current_start_date: String,
    /// End date for current period in YYYY-MM-DD format
    pub current_end_date: String,
    /// Start date for previous period in YYYY-MM-DD format
    pub previous_start_date: String,
    /// End date for previous period in YYYY-MM-DD format
    pub previous_end_date: String,
    /// List of dimensions (query, page, device, country, date)
    #[serde(default)]
    pub dimensions: Option<Vec<String>>,
    /// Type of search results (web, image, video, news, discover, googleNews)
    #[serde(default = "default_search_type")]
    pub search_type: String,
    /// Number of rows to return (max 25000)
    #[serde(default = "default_row_limit")]
    pub row_limit: i64,
}

impl CompareArgs {
    pub fn into_call(self) -> Result<ToolCall> {
        let dimensions = validation::dimensions(&self.dimensions.unwrap_or_default())?;
        let row_limit = validation::row_limit(self.row_limit)?;
        let search_type = validation::search_type(&self.search_type)?;
        Ok(ToolCall::CompareTimePeriods(
            ComparisonParams::new(
                &self.site_url,
                DateRange::new(&self.current_start_date, &self.current_end_date),
                DateRange::new(&self.previous_start_date, &self.previous_end_date),
            )
            .dimensions(&dimensions)
            .search_type(search_type)
            .row_limit(row_limit),
        ))
    }
}

/// Input for ranking pages by a metric
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TopContentArgs {
    /// Full URL of your website (e.g., https://www.example.com/ or sc-domain:example.com)
    pub site_url: String,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// Metric to sort by (clicks, impressions, ctr, position)
    #[serde(default = "default_metric")]
    pub metric: String,
    /// Number of results to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl TopContentArgs {
    pub fn into_call(self) -> Result<ToolCall> {
        Ok(ToolCall::TopPerformingContent {
            metric: validation::metric(&self.metric)?,
            range: DateRange::new(&self.start_date, &self.end_date),
            site_url: self.site_url,
            limit: self.limit,
        })
    }
}

/// Input for bucketing metrics over time
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TrendArgs {
    /// Full URL of your website (e.g., https://www.example.com/ or sc-domain:example.com)
    pub site_url: String,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// Time interval for grouping (day, week, month)
    #[serde(default = "default_interval")]
    pub interval: String,
}

impl TrendArgs {
    pub fn into_call(self) -> Result<ToolCall> {
        Ok(ToolCall::SearchTrends {
            interval: validation::interval(&self.interval)?,
            range: DateRange::new(&self.start_date, &self.end_date),
            site_url: self.site_url,
        })
    }
}

// ---------------------------------------------------------------------------
// ToolCall
// ---------------------------------------------------------------------------

/// A validated tool invocation, ready to run against a [`SearchConsole`].
#[derive(Debug, Clone)]
pub enum ToolCall {
    ListSites,
    QuerySearchAnalytics(AnalyticsParams),
    CompareTimePeriods(ComparisonParams),
    TopPerformingContent {
        site_url: String,
        range: DateRange,
        metric: Metric,
        limit: usize,
    },
    SearchTrends {
        site_url: String,
        range: DateRange,
        interval: Interval,
    },
}

impl ToolCall {
    /// Tool name this call was built for.
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::ListSites => LIST_SITES,
            ToolCall::QuerySearchAnalytics(_) => QUERY_SEARCH_ANALYTICS,
            ToolCall::CompareTimePeriods(_) => COMPARE_TIME_PERIODS,
            ToolCall::TopPerformingContent { .. } => GET_TOP_PERFORMING_CONTENT,
            ToolCall::SearchTrends { .. } => GET_SEARCH_TRENDS,
        }
    }

    /// Run the call and render its outcome as text.
    pub fn run(&self, console: &SearchConsole) -> Result<String> {
        match self {
            ToolCall::ListSites => Ok(render::sites(&console.sites().list()?)),
            ToolCall::QuerySearchAnalytics(params) => {
                Ok(render::analytics(&console.analytics().query(params)?))
            }
            ToolCall::CompareTimePeriods(params) => {
                Ok(render::comparison(&console.comparison().compare(params)?))
            }
            ToolCall::TopPerformingContent {
                site_url,
                range,
                metric,
                limit,
            } => {
                let outcome = console
                    .top_content()
                    .top_pages(site_url, range, *metric, *limit)?;
                Ok(render::top_pages(&outcome, range, *metric, *limit))
            }
            ToolCall::SearchTrends {
                site_url,
                range,
                interval,
            } => {
                let outcome = console.trends().trends(site_url, range, *interval)?;
                Ok(render::trends(&outcome, range, *interval))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// All five tools, in the order they are advertised.
pub fn all(server: Arc<ToolServer>) -> Vec<Tool> {
    vec![
        list_sites(server.clone()),
        query_search_analytics(server.clone()),
        compare_time_periods(server.clone()),
        get_top_performing_content(server.clone()),
        get_search_trends(server),
    ]
}

pub fn list_sites(server: Arc<ToolServer>) -> Tool {
    ToolBuilder::new(LIST_SITES)
        .description("List all verified sites in Search Console.")
        .read_only()
        .idempotent()
        .extractor_handler(
            server,
            |State(server): State<Arc<ToolServer>>, Json(input): Json<ListSitesArgs>| async move {
                Ok(CallToolResult::text(server.call(input.into_call()).await))
            },
        )
        .build()
}

pub fn query_search_analytics(server: Arc<ToolServer>) -> Tool {
    ToolBuilder::new(QUERY_SEARCH_ANALYTICS)
        .description("Query Search Console analytics data for a site.")
        .read_only()
        .idempotent()
        .extractor_handler(
            server,
            |State(server): State<Arc<ToolServer>>, Json(input): Json<QueryArgs>| async move {
                Ok(CallToolResult::text(server.call(input.into_call()).await))
            },
        )
        .build()
}

pub fn compare_time_periods(server: Arc<ToolServer>) -> Tool {
    ToolBuilder::new(COMPARE_TIME_PERIODS)
        .description("Compare Search Console metrics between two time periods.")
        .read_only()
        .idempotent()
        .extractor_handler(
            server,
            |State(server): State<Arc<ToolServer>>, Json(input): Json<CompareArgs>| async move {
                Ok(CallToolResult::text(server.call(input.into_call()).await))
            },
        )
        .build()
}

pub fn get_top_performing_content(server: Arc<ToolServer>) -> Tool {
    ToolBuilder::new(GET_TOP_PERFORMING_CONTENT)
        .description("Get the top performing content based on a specific metric.")
        .read_only()
        .idempotent()
        .extractor_handler(
            server,
            |State(server): State<Arc<ToolServer>>, Json(input): Json<TopContentArgs>| async move {
                Ok(CallToolResult::text(server.call(input.into_call()).await))
            },
        )
        .build()
}

pub fn get_search_trends(server: Arc<ToolServer>) -> Tool {
    ToolBuilder::new(GET_SEARCH_TRENDS)
        .description("Get search trends over time for a site.")
        .read_only()
        .idempotent()
        .extractor_handler(
            server,
            |State(server): State<Arc<ToolServer>>, Json(input): Json<TrendArgs>| async move {
                Ok(CallToolResult::text(server.call(input.into_call()).await))
            },
        )
        .build()
}
