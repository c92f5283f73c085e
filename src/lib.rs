//! Search Console analytics SDK for Rust.
//!
//! Provides a high-level client for the Google Search Console (webmasters v3)
//! API: site listing, raw metric queries, period-over-period comparison,
//! top-content ranking and trend series bucketed by day, week or month.
//! Authentication uses a service-account key file.
//!
//! The comparison and bucketing logic lives in [`compare`] and
//! [`aggregate`] as pure functions over [`models::NormalizedTable`], so it
//! can be used without any network access.
//!
//! # Quick start
//!
//! ```no_run
//! use search_console_sdk::SearchConsole;
//! use search_console_sdk::models::{DateRange, Interval};
//!
//! let console = SearchConsole::builder()
//!     .credentials_path("service-account.json")
//!     .build()
//!     .unwrap();
//!
//! let sites = console.sites().list().unwrap();
//!
//! let range = DateRange::new("2024-01-01", "2024-03-31");
//! let weekly = console
//!     .trends()
//!     .trends("sc-domain:example.com", &range, Interval::Week)
//!     .unwrap();
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod auth;
pub mod client;
pub mod compare;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod render;
pub mod validation;

#[cfg(feature = "async")]
pub use async_client::AsyncSearchConsole;
pub use auth::TokenManager;
pub use client::{ApiClient, SearchApi};
pub use error::{Result, SearchConsoleError};

use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// SearchConsoleBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SearchConsole`] instance.
///
/// Use [`SearchConsole::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SearchConsoleBuilder::build) to create the client.
#[derive(Debug, Clone)]
pub struct SearchConsoleBuilder {
    credentials_path: Option<PathBuf>,
    timeout: Duration,
    api_base: String,
    token_uri: Option<String>,
}

impl Default for SearchConsoleBuilder {
    fn default() -> Self {
        Self {
            credentials_path: None,
            timeout: config::DEFAULT_TIMEOUT,
            api_base: config::API_BASE.to_string(),
            token_uri: None,
        }
    }
}

impl SearchConsoleBuilder {
    /// Set the service-account key file.
    ///
    /// If not set, the path is read from `GOOGLE_APPLICATION_CREDENTIALS`
    /// when [`build()`](Self::build) runs.
    pub fn credentials_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.credentials_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the HTTP request timeout for API and token calls.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API root. Defaults to `https://www.googleapis.com/webmasters/v3`.
    pub fn api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.to_string();
        self
    }

    /// Override the OAuth token endpoint named in the key file.
    pub fn token_uri(mut self, token_uri: &str) -> Self {
        self.token_uri = Some(token_uri.to_string());
        self
    }

    /// Build the client.
    ///
    /// Resolves and parses the key file but makes no network calls; the
    /// first access token is fetched lazily on the first query.
    pub fn build(self) -> Result<SearchConsole> {
        let path = config::resolve_credentials_path(self.credentials_path)?;
        let auth = TokenManager::from_key_file(&path, self.token_uri, self.timeout)?;
        let api = ApiClient::new(&self.api_base, auth)?;
        Ok(SearchConsole::with_api(api))
    }
}

// ---------------------------------------------------------------------------
// SearchConsole
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Wraps a [`SearchApi`] handle and exposes the report interfaces as
/// lightweight borrowing wrappers.
pub struct SearchConsole {
    api: Box<dyn SearchApi>,
}

impl SearchConsole {
    /// Create a new builder for configuring the client.
    pub fn builder() -> SearchConsoleBuilder {
        SearchConsoleBuilder::default()
    }

    /// Wrap an existing API handle, e.g. a custom credential provider.
    pub fn with_api<A: SearchApi + 'static>(api: A) -> Self {
        Self { api: Box::new(api) }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the verified-site listing.
    pub fn sites(&self) -> queries::SiteQuery<'_> {
        queries::SiteQuery::new(self.api.as_ref())
    }

    /// Access raw search analytics queries.
    pub fn analytics(&self) -> queries::AnalyticsQuery<'_> {
        queries::AnalyticsQuery::new(self.api.as_ref())
    }

    /// Access period-over-period comparison.
    pub fn comparison(&self) -> queries::ComparisonQuery<'_> {
        queries::ComparisonQuery::new(self.api.as_ref())
    }

    /// Access top-content ranking.
    pub fn top_content(&self) -> queries::TopContentQuery<'_> {
        queries::TopContentQuery::new(self.api.as_ref())
    }

    /// Access trend series.
    pub fn trends(&self) -> queries::TrendQuery<'_> {
        queries::TrendQuery::new(self.api.as_ref())
    }

    /// Return a reference to the underlying API handle for advanced usage.
    pub fn api(&self) -> &dyn SearchApi {
        self.api.as_ref()
    }

    /// Consume the client and release its HTTP resources.
    pub fn close(self) {
        drop(self);
    }
}
