//! Client-credentials token acquisition

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Deserialize;
use tracing::{debug, error};

use tenantwatch_common::DirectoryConfig;

use crate::error::GraphError;

const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";
const LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";

/// Refresh tokens a minute before they actually expire.
const EXPIRY_SKEW_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Acquires and caches OAuth2 client-credentials tokens for Graph.
pub struct TokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &DirectoryConfig) -> Self {
        Self::with_login_base(http, config, LOGIN_BASE_URL)
    }

    /// Constructor with an overridable login endpoint, used by tests.
    #[must_use]
    pub fn with_login_base(
        http: reqwest::Client,
        config: &DirectoryConfig,
        login_base: &str,
    ) -> Self {
        Self {
            http,
            token_url: format!("{login_base}/{}/oauth2/v2.0/token", config.tenant_id),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cached: Mutex::new(None),
        }
    }

    /// Get a valid access token, reusing the cached one until near expiry.
    ///
    /// # Errors
    /// Returns an error if the token endpoint is unreachable or rejects the
    /// credentials.
    pub async fn access_token(&self) -> Result<String, GraphError> {
        if let Some(cached) = self.cached.lock().as_ref() {
            if cached.expires_at > Utc::now() {
                return Ok(cached.token.clone());
            }
        }

        debug!("requesting new access token");
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", GRAPH_SCOPE),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "token request rejected");
            return Err(GraphError::TokenRequest(format!("{status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| GraphError::Decode(e.to_string()))?;

        let expires_at =
            Utc::now() + Duration::seconds((token.expires_in - EXPIRY_SKEW_SECS).max(0));
        *self.cached.lock() = Some(CachedToken {
            token: token.access_token.clone(),
            expires_at,
        });

        debug!("obtained access token");
        Ok(token.access_token)
    }
}
