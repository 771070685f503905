//! Application state
//!
//! Holds the shared state for the Axum application: the analysis context,
//! the sign-in log store, the directory fetcher, and configuration.

use std::sync::Arc;

use tenantwatch_common::AppConfig;
use tenantwatch_core::DirectoryFetcher;
use tenantwatch_service::{InsightsService, RefreshService, SharedContext};
use tenantwatch_store::SignInLogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    context: SharedContext,
    store: SignInLogStore,
    fetcher: Arc<dyn DirectoryFetcher>,
    insights: Option<Arc<InsightsService>>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        context: SharedContext,
        store: SignInLogStore,
        fetcher: Arc<dyn DirectoryFetcher>,
        insights: Option<Arc<InsightsService>>,
        config: AppConfig,
    ) -> Self {
        Self {
            context,
            store,
            fetcher,
            insights,
            config: Arc::new(config),
        }
    }

    /// Get the shared analysis context
    pub fn context(&self) -> &SharedContext {
        &self.context
    }

    /// Get the insights service, if a completion deployment is configured
    pub fn insights(&self) -> Option<&Arc<InsightsService>> {
        self.insights.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build a refresh service over this state's collaborators
    pub fn refresh_service(&self) -> RefreshService {
        RefreshService::new(
            Arc::clone(&self.fetcher),
            self.store.clone(),
            Arc::clone(&self.context),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("insights_configured", &self.insights.is_some())
            .finish_non_exhaustive()
    }
}
