//! # tenantwatch-service
//!
//! Application layer containing the analysis logic, the query resolver,
//! and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types
pub use services::{
    find_inactive, resolve_query, AnalysisContext, InsightsService, QueryData, QueryResult,
    RefreshOutcome, RefreshService, ServiceError, ServiceResult, SharedContext,
};
