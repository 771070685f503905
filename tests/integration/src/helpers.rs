//! Test helpers for integration tests
//!
//! Builds a fully wired application over a stub directory fetcher so API
//! tests run without network access or credentials.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::util::ServiceExt;

use tenantwatch_api::{create_app, state::AppState};
use tenantwatch_common::{
    AnalysisConfig, AppConfig, AppSettings, CorsConfig, DirectoryConfig, Environment,
    ServerConfig, SignInLogConfig,
};
use tenantwatch_core::{CoreResult, DirectoryFetcher, DomainError, SignInRecord, UserRecord};
use tenantwatch_service::AnalysisContext;
use tenantwatch_store::SignInLogStore;

/// Directory fetcher stub with canned data.
pub struct StubFetcher {
    pub roster: Vec<UserRecord>,
    pub signins: Vec<SignInRecord>,
    /// Simulate the sign-in endpoint being down.
    pub fail_signins: bool,
}

#[async_trait]
impl DirectoryFetcher for StubFetcher {
    async fn fetch_roster(&self) -> CoreResult<Vec<UserRecord>> {
        Ok(self.roster.clone())
    }

    async fn fetch_signins(&self) -> CoreResult<Vec<SignInRecord>> {
        if self.fail_signins {
            return Err(DomainError::FetchError("signin endpoint down".to_string()));
        }
        Ok(self.signins.clone())
    }
}

/// Configuration pointing the sign-in log at a temp directory.
pub fn test_config(log_path: &str) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "tenantwatch-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        directory: DirectoryConfig {
            tenant_id: "test-tenant".to_string(),
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            signin_window_days: 30,
        },
        signin_log: SignInLogConfig {
            path: log_path.to_string(),
        },
        analysis: AnalysisConfig {
            default_threshold_days: 30,
            max_threshold_days: 90,
        },
        completion: None,
        cors: CorsConfig::default(),
    }
}

/// A wired test application plus the temp dir backing its sign-in log.
pub struct TestApp {
    pub app: Router,
    pub _log_dir: TempDir,
}

impl TestApp {
    /// Build an app over a stub fetcher, with an empty starting context.
    pub fn new(fetcher: StubFetcher) -> Result<Self> {
        let log_dir = TempDir::new()?;
        let log_path = log_dir.path().join("signin_logs.csv");
        let config = test_config(&log_path.display().to_string());

        let store = SignInLogStore::new(&config.signin_log.path);
        let context = AnalysisContext::empty().shared();
        let state = AppState::new(context, store, Arc::new(fetcher), None, config);

        Ok(Self {
            app: create_app(state),
            _log_dir: log_dir,
        })
    }

    /// GET a path, returning status and parsed JSON body.
    pub async fn get(&self, path: &str) -> Result<(StatusCode, serde_json::Value)> {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty())?)
            .await?;
        read_json(response).await
    }

    /// POST a JSON body to a path, returning status and parsed JSON body.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<(StatusCode, serde_json::Value)> {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))?,
            )
            .await?;
        read_json(response).await
    }
}

async fn read_json(
    response: axum::response::Response,
) -> Result<(StatusCode, serde_json::Value)> {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}
