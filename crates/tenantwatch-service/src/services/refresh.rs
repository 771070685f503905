//! Dataset refresh orchestration
//!
//! Pulls a fresh roster and sign-in window from the directory, persists the
//! sign-in log, and swaps the analysis context. A failed sign-in fetch
//! degrades to the previously persisted log; a failed roster fetch aborts
//! the refresh.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use tenantwatch_core::{DirectoryFetcher, SignInIndex};
use tenantwatch_store::SignInLogStore;

use super::context::SharedContext;
use super::error::{ServiceError, ServiceResult};

/// What a refresh accomplished.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub users_fetched: usize,
    pub signins_indexed: usize,
    /// False when the sign-in fetch failed and the stale log was used.
    pub signin_fetch_ok: bool,
}

/// Orchestrates fetch, persist, and context swap.
pub struct RefreshService {
    fetcher: Arc<dyn DirectoryFetcher>,
    store: SignInLogStore,
    context: SharedContext,
}

impl RefreshService {
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn DirectoryFetcher>,
        store: SignInLogStore,
        context: SharedContext,
    ) -> Self {
        Self {
            fetcher,
            store,
            context,
        }
    }

    /// Run one full refresh cycle.
    ///
    /// # Errors
    /// Returns an error if the roster fetch fails or the persisted log
    /// cannot be read back.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> ServiceResult<RefreshOutcome> {
        let signin_fetch_ok = match self.fetcher.fetch_signins().await {
            Ok(signins) => {
                self.store.replace(&signins)?;
                info!(count = signins.len(), "persisted fresh sign-in log");
                true
            }
            Err(e) => {
                warn!(error = %e, "sign-in fetch failed, keeping persisted log");
                false
            }
        };

        let users = self
            .fetcher
            .fetch_roster()
            .await
            .map_err(ServiceError::from)?;

        // The index is always rebuilt from the persisted log so analyses
        // stay reproducible across restarts.
        let records = self.store.read()?;
        let index = SignInIndex::from_records(records);

        let outcome = RefreshOutcome {
            users_fetched: users.len(),
            signins_indexed: index.len(),
            signin_fetch_ok,
        };

        self.context.write().replace_dataset(users, index);
        info!(
            users = outcome.users_fetched,
            signins = outcome.signins_indexed,
            "analysis dataset refreshed"
        );
        Ok(outcome)
    }
}
