use serde::{Deserialize, Serialize};

use super::enums::{Dimension, SearchType};

// ---------------------------------------------------------------------------
// SearchAnalyticsRequest — Body of a searchAnalytics.query call
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsRequest {
    pub start_date: String,
    pub end_date: String,
    pub dimensions: Vec<Dimension>,
    pub search_type: SearchType,
    pub row_limit: u32,
}

impl SearchAnalyticsRequest {
    pub fn new(start_date: &str, end_date: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            dimensions: Vec::new(),
            search_type: SearchType::Web,
            row_limit: crate::config::DEFAULT_ROW_LIMIT,
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
// SearchAnalyticsResponse — Raw rows as returned by the API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<ApiRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_aggregation_type: Option<String>,
}

impl SearchAnalyticsResponse {
    pub fn from_rows(rows: Vec<ApiRow>) -> Self {
        Self {
            rows: Some(rows),
            response_aggregation_type: None,
        }
    }

    /// Rows of the response; an absent `rows` field reads as empty.
    pub fn rows(&self) -> &[ApiRow] {
        self.rows.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// One upstream row. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiRow {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub clicks: Option<f64>,
    #[serde(default)]
    pub impressions: Option<f64>,
    #[serde(default)]
    pub ctr: Option<f64>,
    #[serde(default)]
    pub position: Option<f64>,
}

impl ApiRow {
    pub fn new(keys: &[&str], clicks: f64, impressions: f64, ctr: f64, position: f64) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            clicks: Some(clicks),
            impressions: Some(impressions),
            ctr: Some(ctr),
            position: Some(position),
        }
    }

    pub fn metric(&self, metric: super::enums::Metric) -> f64 {
        use super::enums::Metric;
        let value = match metric {
            Metric::Clicks => self.clicks,
            Metric::Impressions => self.impressions,
            Metric::Ctr => self.ctr,
            Metric::Position => self.position,
        };
        value.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Sites — sites.list response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesListResponse {
    #[serde(default)]
    pub site_entry: Vec<SiteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    pub site_url: String,
    #[serde(default)]
    pub permission_level: Option<String>,
}

// ---------------------------------------------------------------------------
// ApiErrorBody — Google JSON error envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}
