//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use tenantwatch_common::{AppConfig, AppError};
use tenantwatch_core::SignInIndex;
use tenantwatch_graph::{GraphDirectoryClient, HttpCompletionClient};
use tenantwatch_service::{AnalysisContext, InsightsService};
use tenantwatch_store::SignInLogStore;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &state.config().cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The analysis context is seeded from the persisted sign-in log so queries
/// about sign-in activity work before the first refresh; the roster itself
/// requires a refresh.
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let store = SignInLogStore::new(&config.signin_log.path);

    let index = match store.read() {
        Ok(records) => SignInIndex::from_records(records),
        Err(e) => {
            warn!(error = %e, "could not read persisted sign-in log, starting empty");
            SignInIndex::empty()
        }
    };
    info!(signins = index.len(), "seeded sign-in index from persisted log");

    let context = AnalysisContext::new(Vec::new(), index).shared();

    let fetcher = Arc::new(GraphDirectoryClient::new(&config.directory));

    let insights = config.completion.as_ref().map(|completion| {
        info!(deployment = %completion.deployment, "completion deployment configured");
        Arc::new(InsightsService::new(Arc::new(HttpCompletionClient::new(
            completion,
        ))))
    });
    if insights.is_none() {
        info!("no completion deployment configured, insight endpoints disabled");
    }

    Ok(AppState::new(context, store, fetcher, insights, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config)?;
    let app = create_app(state);

    run_server(app, addr).await
}
