//! Query modules for the Search Console SDK.
//!
//! Each module provides a query struct that borrows a [`SearchApi`](crate::client::SearchApi)
//! handle and exposes methods returning `Result<Outcome<T>>`: data, an
//! informational "no data", or an error.

pub mod analytics;
pub mod comparison;
pub mod sites;
pub mod top_content;
pub mod trends;

pub use analytics::{AnalyticsParams, AnalyticsQuery};
pub use comparison::{ComparisonParams, ComparisonQuery};
pub use sites::SiteQuery;
pub use top_content::TopContentQuery;
pub use trends::TrendQuery;
