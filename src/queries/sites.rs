//! Verified site listing.

use crate::client::SearchApi;
use crate::error::Result;
use crate::models::Outcome;

/// Query interface for the sites visible to the credentials.
pub struct SiteQuery<'a> {
    api: &'a dyn SearchApi,
}

impl<'a> SiteQuery<'a> {
    pub fn new(api: &'a dyn SearchApi) -> Self {
        Self { api }
    }

    /// Site URLs in API order, or [`Outcome::NoData`] when there are none.
    pub fn list(&self) -> Result<Outcome<Vec<String>>> {
        let sites: Vec<String> = self
            .api
            .list_sites()?
            .into_iter()
            .map(|entry| entry.site_url)
            .collect();
        if sites.is_empty() {
            return Ok(Outcome::NoData);
        }
        Ok(Outcome::Data(sites))
    }
}
