use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchConsoleError;

// ---------------------------------------------------------------------------
// Dimension — Categorical attribute results can be grouped by
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Query,
    Page,
    Country,
    Device,
    Date,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Query,
        Dimension::Page,
        Dimension::Country,
        Dimension::Device,
        Dimension::Date,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Query => "query",
            Dimension::Page => "page",
            Dimension::Country => "country",
            Dimension::Device => "device",
            Dimension::Date => "date",
        }
    }
}

impl FromStr for Dimension {
    type Err = SearchConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                SearchConsoleError::InvalidArgument(format!(
                    "Invalid dimension: {}. Valid dimensions are: {}",
                    s,
                    join_names(Dimension::ALL.iter().map(|d| d.as_str()))
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// SearchType — Which search surface the metrics come from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    #[default]
    Web,
    Image,
    Video,
    News,
    Discover,
    GoogleNews,
}

impl SearchType {
    pub const ALL: [SearchType; 6] = [
        SearchType::Web,
        SearchType::Image,
        SearchType::Video,
        SearchType::News,
        SearchType::Discover,
        SearchType::GoogleNews,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Web => "web",
            SearchType::Image => "image",
            SearchType::Video => "video",
            SearchType::News => "news",
            SearchType::Discover => "discover",
            SearchType::GoogleNews => "googleNews",
        }
    }
}

impl FromStr for SearchType {
    type Err = SearchConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                SearchConsoleError::InvalidArgument(format!(
                    "Invalid search_type: {}. Valid types are: {}",
                    s,
                    join_names(SearchType::ALL.iter().map(|t| t.as_str()))
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Metric — One of the four numeric fields every row carries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Clicks,
    Impressions,
    Ctr,
    Position,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Clicks,
        Metric::Impressions,
        Metric::Ctr,
        Metric::Position,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Clicks => "clicks",
            Metric::Impressions => "impressions",
            Metric::Ctr => "ctr",
            Metric::Position => "position",
        }
    }

    /// Title-cased name used in report captions (`"Clicks"`, `"Ctr"`, ...).
    pub fn caption(self) -> String {
        capitalize(self.as_str())
    }

    /// Whether a smaller value ranks higher. Only true for `position`.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Metric::Position)
    }
}

impl FromStr for Metric {
    type Err = SearchConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                SearchConsoleError::InvalidArgument(format!(
                    "Invalid metric: {}. Valid metrics are: {}",
                    s,
                    join_names(Metric::ALL.iter().map(|m| m.as_str()))
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Interval — Trend bucket width
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    #[default]
    Week,
    Month,
}

impl Interval {
    pub const ALL: [Interval; 3] = [Interval::Day, Interval::Week, Interval::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
        }
    }

    pub fn caption(self) -> String {
        capitalize(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = SearchConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| {
                SearchConsoleError::InvalidArgument(format!(
                    "Invalid interval: {}. Valid intervals are: {}",
                    s,
                    join_names(Interval::ALL.iter().map(|i| i.as_str()))
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Dimension, SearchType, Metric, Interval);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
