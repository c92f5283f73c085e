use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, SearchConsoleError};

pub const API_BASE: &str = "https://www.googleapis.com/webmasters/v3";
pub const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const SCOPE: &str = "https://www.googleapis.com/auth/webmasters.readonly";
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const MIN_ROW_LIMIT: u32 = 1;
pub const MAX_ROW_LIMIT: u32 = 25_000;
pub const DEFAULT_ROW_LIMIT: u32 = 1000;

/// Rows fetched for top-content and trend reports before local post-processing.
pub const REPORT_ROW_LIMIT: u32 = 1000;
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Lifetime requested for the signed service-account assertion.
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Access tokens are refreshed this long before they actually expire.
pub const TOKEN_EXPIRY_SLACK_SECS: i64 = 60;

/// Resolve the service-account key path.
///
/// An explicit path wins; otherwise `GOOGLE_APPLICATION_CREDENTIALS` is read.
/// The file must exist.
pub fn resolve_credentials_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path,
        None => match env::var_os(CREDENTIALS_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => {
                return Err(SearchConsoleError::Config(format!(
                    "{} environment variable not set",
                    CREDENTIALS_ENV
                )))
            }
        },
    };

    if !path.exists() {
        return Err(SearchConsoleError::Config(format!(
            "Credentials file not found at {}",
            path.display()
        )));
    }
    Ok(path)
}
