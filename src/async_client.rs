//! Async wrapper around [`SearchConsole`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use search_console_sdk::AsyncSearchConsole;
//! use search_console_sdk::models::DateRange;
//!
//! # async fn example() -> search_console_sdk::Result<()> {
//! let console = AsyncSearchConsole::builder()
//!     .credentials_path("service-account.json")
//!     .build()
//!     .await?;
//!
//! // Run any sync SDK method via closure
//! let range = DateRange::new("2024-01-01", "2024-01-31");
//! let trends = console
//!     .run(move |c| c.trends().trends("sc-domain:example.com", &range, Default::default()))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, SearchConsoleError};
use crate::models::{Outcome, PeriodComparison};
use crate::queries::ComparisonParams;
use crate::{SearchConsole, SearchConsoleBuilder};

// ---------------------------------------------------------------------------
// AsyncSearchConsoleBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSearchConsole`] instance.
///
/// Offers the same options as [`SearchConsoleBuilder`].
#[derive(Debug, Clone, Default)]
pub struct AsyncSearchConsoleBuilder {
    inner: SearchConsoleBuilder,
}

impl AsyncSearchConsoleBuilder {
    /// Set the service-account key file.
    pub fn credentials_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.credentials_path(path);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Override the API root.
    pub fn api_base(mut self, api_base: &str) -> Self {
        self.inner = self.inner.api_base(api_base);
        self
    }

    /// Override the OAuth token endpoint named in the key file.
    pub fn token_uri(mut self, token_uri: &str) -> Self {
        self.inner = self.inner.token_uri(token_uri);
        self
    }

    /// Build the async client.
    ///
    /// Reading the key file runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncSearchConsole> {
        let console = tokio::task::spawn_blocking(move || self.inner.build())
            .await
            .map_err(join_error)??;
        Ok(AsyncSearchConsole::from_console(console))
    }
}

// ---------------------------------------------------------------------------
// AsyncSearchConsole
// ---------------------------------------------------------------------------

/// Async wrapper around [`SearchConsole`].
///
/// The underlying [`SearchConsole`] is protected by a [`Mutex`] since the
/// HTTP client keeps its token cache in a `RefCell`.
pub struct AsyncSearchConsole {
    inner: Arc<Mutex<SearchConsole>>,
}

impl AsyncSearchConsole {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncSearchConsoleBuilder {
        AsyncSearchConsoleBuilder::default()
    }

    /// Wrap an existing client.
    pub fn from_console(console: SearchConsole) -> Self {
        Self {
            inner: Arc::new(Mutex::new(console)),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SearchConsole) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let console = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = console
                .lock()
                .map_err(|_| SearchConsoleError::Config("client lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(join_error)?
    }

    /// List verified site URLs asynchronously.
    pub async fn sites(&self) -> Result<Outcome<Vec<String>>> {
        self.run(|c| c.sites().list()).await
    }

    /// Compare two periods asynchronously.
    pub async fn compare(&self, params: ComparisonParams) -> Result<Outcome<PeriodComparison>> {
        self.run(move |c| c.comparison().compare(&params)).await
    }
}

fn join_error(e: tokio::task::JoinError) -> SearchConsoleError {
    SearchConsoleError::Config(format!("Task join error: {e}"))
}
