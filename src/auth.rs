//! Service-account authentication for the Search Console API.
//!
//! Signs an RS256 JWT assertion with the service account's private key,
//! exchanges it for a bearer token at the OAuth token endpoint, and keeps the
//! token in memory until shortly before it expires. The HTTP client is built
//! lazily on first use and shared with the API client.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config;
use crate::error::{Result, SearchConsoleError};

/// The fields of a service-account key file this crate needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl ServiceAccountKey {
    /// Read and parse a service-account key file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SearchConsoleError::Config(format!(
                "Unable to read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents).map_err(|e| {
            SearchConsoleError::Config(format!(
                "Invalid service account key in {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

struct CachedToken {
    access_token: String,
    expires_at: i64,
}

/// Produces bearer tokens for a service account.
pub struct TokenManager {
    key: ServiceAccountKey,
    token_uri: String,
    timeout: Duration,
    client: Option<Client>,
    token: Option<CachedToken>,
}

impl TokenManager {
    /// Create a token manager.
    ///
    /// The token endpoint is, in order: `token_uri`, the key file's
    /// `token_uri`, then Google's default endpoint.
    pub fn new(key: ServiceAccountKey, token_uri: Option<String>, timeout: Duration) -> Self {
        let token_uri = token_uri
            .or_else(|| key.token_uri.clone())
            .unwrap_or_else(|| config::TOKEN_URI.to_string());
        Self {
            key,
            token_uri,
            timeout,
            client: None,
            token: None,
        }
    }

    /// Load the key file at `path` and create a token manager for it.
    pub fn from_key_file(path: &Path, token_uri: Option<String>, timeout: Duration) -> Result<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        info!(client_email = %key.client_email, "loaded service account credentials");
        Ok(Self::new(key, token_uri, timeout))
    }

    /// Service account e-mail the tokens are issued for.
    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| SearchConsoleError::Config("HTTP client unavailable".to_string()))
    }

    /// Return a valid bearer token, exchanging a fresh assertion if needed.
    pub fn access_token(&mut self) -> Result<String> {
        let now = Utc::now().timestamp();
        if let Some(token) = &self.token {
            if now < token.expires_at - config::TOKEN_EXPIRY_SLACK_SECS {
                return Ok(token.access_token.clone());
            }
        }

        let assertion = self.sign_assertion(now)?;
        let token = self.exchange(&assertion, now)?;
        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    /// Forget the cached token so the next call exchanges a new one.
    pub fn invalidate(&mut self) {
        self.token = None;
    }

    fn sign_assertion(&self, now: i64) -> Result<String> {
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: config::SCOPE,
            aud: &self.token_uri,
            iat: now,
            exp: now + config::ASSERTION_LIFETIME_SECS,
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();
        let key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(jsonwebtoken::encode(&header, &claims, &key)?)
    }

    fn exchange(&mut self, assertion: &str, now: i64) -> Result<CachedToken> {
        debug!(token_uri = %self.token_uri, "exchanging service account assertion");
        let token_uri = self.token_uri.clone();
        let client = self.client()?.clone();

        let resp = client
            .post(&token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(desc) => format!("{}: {}", err.error, desc),
                    None => err.error,
                },
                Err(_) => format!("HTTP {}: {}", status.as_u16(), body.trim()),
            };
            return Err(SearchConsoleError::Auth(message));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        let lifetime = token.expires_in.unwrap_or(config::ASSERTION_LIFETIME_SECS);
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + lifetime,
        })
    }
}
