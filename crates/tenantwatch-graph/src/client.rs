//! Graph directory client

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use tenantwatch_common::DirectoryConfig;
use tenantwatch_core::{
    parse_signin_timestamp, CoreResult, DirectoryFetcher, SignInRecord, UserRecord, NA,
};

use crate::auth::TokenProvider;
use crate::error::GraphError;

const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

const USER_SELECT: &str =
    "id,userPrincipalName,displayName,jobTitle,department,accountEnabled,userType";
const USER_EXPAND: &str = "memberOf($select=displayName)";
const SIGNIN_SELECT: &str = "id,userId,userDisplayName,createdDateTime";
const PAGE_SIZE: u32 = 999;

/// One page of a Graph collection response.
#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphUser {
    id: Option<String>,
    user_principal_name: Option<String>,
    display_name: Option<String>,
    job_title: Option<String>,
    department: Option<String>,
    account_enabled: Option<bool>,
    user_type: Option<String>,
    #[serde(rename = "memberOf", default)]
    member_of: Vec<GraphGroupRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphGroupRef {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphSignIn {
    user_id: Option<String>,
    user_display_name: Option<String>,
    created_date_time: Option<String>,
}

/// Directory client backed by Microsoft Graph.
pub struct GraphDirectoryClient {
    http: reqwest::Client,
    auth: TokenProvider,
    base_url: String,
    signin_window_days: u32,
}

impl GraphDirectoryClient {
    #[must_use]
    pub fn new(config: &DirectoryConfig) -> Self {
        let http = reqwest::Client::new();
        let auth = TokenProvider::new(http.clone(), config);
        Self {
            http,
            auth,
            base_url: GRAPH_BASE_URL.to_string(),
            signin_window_days: config.signin_window_days,
        }
    }

    /// Constructor with overridable endpoints, used by tests.
    #[must_use]
    pub fn with_endpoints(config: &DirectoryConfig, base_url: &str, login_base: &str) -> Self {
        let http = reqwest::Client::new();
        let auth = TokenProvider::with_login_base(http.clone(), config, login_base);
        Self {
            http,
            auth,
            base_url: base_url.to_string(),
            signin_window_days: config.signin_window_days,
        }
    }

    async fn get_page<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Page<T>, GraphError> {
        let token = self.auth.access_token().await?;
        let mut request = self.http.get(url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| GraphError::Decode(e.to_string()))
    }

    /// Fetch the full user roster, following pagination.
    ///
    /// # Errors
    /// Returns an error on auth failure, transport failure, or a non-success
    /// Graph status.
    pub async fn users(&self) -> Result<Vec<UserRecord>, GraphError> {
        let mut users = Vec::new();
        let mut page: Page<GraphUser> = self
            .get_page(
                &format!("{}/users", self.base_url),
                &[
                    ("$select", USER_SELECT.to_string()),
                    ("$expand", USER_EXPAND.to_string()),
                ],
            )
            .await?;

        loop {
            users.extend(page.value.into_iter().map(map_user));
            match page.next_link {
                Some(next) => {
                    debug!(url = %next, "fetching next user page");
                    page = self.get_page(&next, &[]).await?;
                }
                None => break,
            }
        }

        debug!(count = users.len(), "fetched user roster");
        Ok(users)
    }

    /// Fetch sign-in events over the configured rolling window, following
    /// pagination. Events without a timestamp are skipped.
    ///
    /// # Errors
    /// Returns an error on auth failure, transport failure, or a non-success
    /// Graph status.
    pub async fn signins(&self) -> Result<Vec<SignInRecord>, GraphError> {
        let end = Utc::now();
        let start = end - Duration::days(i64::from(self.signin_window_days));
        let filter = format!(
            "createdDateTime ge {} and createdDateTime le {}",
            start.format("%Y-%m-%dT%H:%M:%SZ"),
            end.format("%Y-%m-%dT%H:%M:%SZ")
        );

        let mut records = Vec::new();
        let mut page: Page<GraphSignIn> = self
            .get_page(
                &format!("{}/auditLogs/signIns", self.base_url),
                &[
                    ("$select", SIGNIN_SELECT.to_string()),
                    ("$filter", filter),
                    ("$top", PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        loop {
            for signin in page.value {
                if let Some(record) = map_signin(signin) {
                    records.push(record);
                }
            }
            match page.next_link {
                Some(next) => {
                    debug!(url = %next, "fetching next sign-in page");
                    page = self.get_page(&next, &[]).await?;
                }
                None => break,
            }
        }

        debug!(count = records.len(), "fetched sign-in events");
        Ok(records)
    }
}

fn map_user(user: GraphUser) -> UserRecord {
    let groups = user
        .member_of
        .into_iter()
        .filter_map(|g| g.display_name)
        .collect();
    UserRecord {
        id: user.id.unwrap_or_else(|| NA.to_string()),
        principal_name: user.user_principal_name.unwrap_or_else(|| NA.to_string()),
        display_name: user.display_name.unwrap_or_else(|| NA.to_string()),
        job_title: user.job_title,
        department: user.department,
        account_enabled: user.account_enabled.unwrap_or(false),
        user_type: user.user_type.unwrap_or_else(|| NA.to_string()),
        groups,
    }
}

fn map_signin(signin: GraphSignIn) -> Option<SignInRecord> {
    let user_id = signin.user_id?;
    let Some(raw) = signin.created_date_time else {
        warn!(user_id = %user_id, "skipping sign-in event without timestamp");
        return None;
    };
    match parse_signin_timestamp(&raw) {
        Ok(timestamp) => Some(SignInRecord {
            user_id,
            timestamp,
            display_name: signin.user_display_name.unwrap_or_else(|| NA.to_string()),
        }),
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "skipping sign-in event with bad timestamp");
            None
        }
    }
}

#[async_trait]
impl DirectoryFetcher for GraphDirectoryClient {
    async fn fetch_roster(&self) -> CoreResult<Vec<UserRecord>> {
        Ok(self.users().await?)
    }

    async fn fetch_signins(&self) -> CoreResult<Vec<SignInRecord>> {
        Ok(self.signins().await?)
    }
}
