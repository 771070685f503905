//! Collaborator traits (ports) - interfaces the core defines and the
//! infrastructure layer implements
//!
//! The analyzer and resolver never perform I/O themselves; everything remote
//! (directory API, completion service) sits behind these seams so the core
//! works identically against HTTP clients, mocks, or fixtures.

use async_trait::async_trait;

use crate::entities::{SignInRecord, UserRecord};
use crate::error::DomainError;

/// Result type for collaborator operations
pub type CoreResult<T> = Result<T, DomainError>;

/// Supplier of the roster and raw sign-in events for a tenant.
#[async_trait]
pub trait DirectoryFetcher: Send + Sync {
    /// Fetch the full roster of directory accounts.
    async fn fetch_roster(&self) -> CoreResult<Vec<UserRecord>>;

    /// Fetch raw sign-in events for the collection window.
    async fn fetch_signins(&self) -> CoreResult<Vec<SignInRecord>>;
}

/// Narrow interface to a remote completion service.
///
/// Only the insight analyses use this; the deterministic query resolver
/// must work fully without it.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> CoreResult<String>;
}
