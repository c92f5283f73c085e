//! Search Console REST client and the [`SearchApi`] seam the query layer uses.

use std::cell::RefCell;

use reqwest::blocking::Response;
use reqwest::Url;
use tracing::{debug, warn};

use crate::auth::TokenManager;
use crate::error::{Result, SearchConsoleError};
use crate::models::{
    ApiErrorBody, SearchAnalyticsRequest, SearchAnalyticsResponse, SiteEntry, SitesListResponse,
};

/// An authenticated handle onto the Search Console API.
///
/// The query interfaces only ever talk to this trait, so tests can swap in
/// canned responses.
pub trait SearchApi: Send {
    /// List the sites the credentials can see.
    fn list_sites(&self) -> Result<Vec<SiteEntry>>;

    /// Run one searchAnalytics query against `site_url`.
    fn query(&self, site_url: &str, request: &SearchAnalyticsRequest) -> Result<SearchAnalyticsResponse>;
}

/// Blocking HTTP implementation of [`SearchApi`].
pub struct ApiClient {
    api_base: Url,
    /// Token source; also owns the shared HTTP client.
    pub auth: RefCell<TokenManager>,
}

impl ApiClient {
    /// Create a client rooted at `api_base` (e.g. `https://www.googleapis.com/webmasters/v3`).
    pub fn new(api_base: &str, auth: TokenManager) -> Result<Self> {
        let api_base = Url::parse(api_base).map_err(|e| {
            SearchConsoleError::Config(format!("Invalid API base URL {}: {}", api_base, e))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(SearchConsoleError::Config(format!(
                "Invalid API base URL {}",
                api_base
            )));
        }
        Ok(Self {
            api_base,
            auth: RefCell::new(auth),
        })
    }

    /// Build an endpoint URL by appending percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| SearchConsoleError::Config(format!("Invalid API base URL {}", self.api_base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn bearer(&self) -> Result<(reqwest::blocking::Client, String)> {
        let mut auth = self.auth.borrow_mut();
        let token = auth.access_token()?;
        let client = auth.client()?.clone();
        Ok((client, token))
    }

    /// Map a non-2xx response to an error. A 401 also drops the cached
    /// token so the next call exchanges a fresh one.
    fn check_status(&self, resp: Response) -> Result<Response> {
        let result = check_status(resp);
        if let Err(SearchConsoleError::Api { status: 401, .. }) = &result {
            warn!("access token rejected, discarding cached token");
            self.auth.borrow_mut().invalidate();
        }
        result
    }
}

impl SearchApi for ApiClient {
    fn list_sites(&self) -> Result<Vec<SiteEntry>> {
        let url = self.endpoint(&["sites"])?;
        debug!(%url, "listing sites");
        let (client, token) = self.bearer()?;
        let resp = self.check_status(client.get(url).bearer_auth(token).send()?)?;
        let body: SitesListResponse = resp.json()?;
        Ok(body.site_entry)
    }

    fn query(&self, site_url: &str, request: &SearchAnalyticsRequest) -> Result<SearchAnalyticsResponse> {
        let url = self.endpoint(&["sites", site_url, "searchAnalytics", "query"])?;
        debug!(
            %url,
            start_date = %request.start_date,
            end_date = %request.end_date,
            dimensions = ?request.dimensions,
            search_type = %request.search_type,
            row_limit = request.row_limit,
            "running search analytics query"
        );
        let (client, token) = self.bearer()?;
        let resp = self.check_status(client.post(url).bearer_auth(token).json(request).send()?)?;
        let body: SearchAnalyticsResponse = resp.json()?;
        debug!(rows = body.rows().len(), "search analytics query returned");
        Ok(body)
    }
}

/// Turn a non-2xx response into [`SearchConsoleError::Api`], preferring the
/// message from Google's JSON error envelope.
fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(err) if !err.error.message.is_empty() => err.error.message,
        _ => body.trim().to_string(),
    };
    Err(SearchConsoleError::Api {
        status: status.as_u16(),
        message,
    })
}
