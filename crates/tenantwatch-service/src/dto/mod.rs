//! Data transfer objects

pub mod requests;
pub mod responses;

pub use requests::{InactiveQueryParams, QueryRequest};
pub use responses::{
    AggregateResponse, ApiResponse, InactiveAnalysisResponse, InactiveUserResponse,
    InsightResponse, QueryResponse, RefreshResponse, RosterUserResponse,
};
