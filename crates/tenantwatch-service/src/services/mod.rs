//! Business logic services
//!
//! This module contains the inactivity analysis, the query resolver, the
//! aggregate helpers, and the orchestration services around them.

pub mod aggregates;
pub mod context;
pub mod error;
pub mod inactivity;
pub mod insights;
pub mod query;
pub mod refresh;

// Re-export all services for convenience
pub use context::{AnalysisContext, SharedContext};
pub use error::{ServiceError, ServiceResult};
pub use inactivity::find_inactive;
pub use insights::InsightsService;
pub use query::{resolve_query, QueryData, QueryResult};
pub use refresh::{RefreshOutcome, RefreshService};
