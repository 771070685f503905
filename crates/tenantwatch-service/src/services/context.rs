//! Analysis context - the in-memory dataset services operate on
//!
//! Holds the current roster and sign-in index, plus a per-threshold cache of
//! inactivity results. Replaced wholesale on refresh.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use tenantwatch_core::{InactiveUserSummary, SignInIndex, UserRecord};

use super::error::ServiceResult;
use super::inactivity::find_inactive;

/// Shared handle to the analysis context.
pub type SharedContext = Arc<RwLock<AnalysisContext>>;

/// The dataset services read from: roster, sign-in index, and cached
/// inactivity results keyed by threshold.
///
/// The cache is invalidated whenever the dataset is replaced, never
/// selectively.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    users: Vec<UserRecord>,
    signins: SignInIndex,
    inactive_cache: HashMap<u32, Vec<InactiveUserSummary>>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl AnalysisContext {
    #[must_use]
    pub fn new(users: Vec<UserRecord>, signins: SignInIndex) -> Self {
        Self {
            users,
            signins,
            inactive_cache: HashMap::new(),
            last_refreshed: None,
        }
    }

    /// A context with no data loaded yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a context for shared use across request handlers.
    #[must_use]
    pub fn shared(self) -> SharedContext {
        Arc::new(RwLock::new(self))
    }

    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn signin_index(&self) -> &SignInIndex {
        &self.signins
    }

    #[must_use]
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.users.is_empty()
    }

    /// Swap in a freshly fetched dataset, dropping all cached results.
    pub fn replace_dataset(&mut self, users: Vec<UserRecord>, signins: SignInIndex) {
        debug!(
            users = users.len(),
            signins = signins.len(),
            "replacing analysis dataset"
        );
        self.users = users;
        self.signins = signins;
        self.inactive_cache.clear();
        self.last_refreshed = Some(Utc::now());
    }

    /// Inactive users at the given threshold, computed once per dataset and
    /// cached. Results are evaluated against the current wall clock.
    ///
    /// # Errors
    /// Returns an error if the roster contains a user with an empty id.
    pub fn inactive_users(&mut self, threshold_days: u32) -> ServiceResult<&[InactiveUserSummary]> {
        if !self.inactive_cache.contains_key(&threshold_days) {
            let computed = find_inactive(&self.users, &self.signins, threshold_days, Utc::now())?;
            self.inactive_cache.insert(threshold_days, computed);
        }
        Ok(self
            .inactive_cache
            .get(&threshold_days)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// The roster subset that is inactive at the given threshold, in roster
    /// order. Used by query handlers that need full user detail rather than
    /// summaries.
    ///
    /// # Errors
    /// Returns an error if the roster contains a user with an empty id.
    pub fn inactive_roster(&mut self, threshold_days: u32) -> ServiceResult<Vec<UserRecord>> {
        let ids: std::collections::HashSet<String> = self
            .inactive_users(threshold_days)?
            .iter()
            .map(|s| s.user_id.clone())
            .collect();
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}
