//! Aggregate handlers
//!
//! Deterministic rollups over the roster; the completion-backed variants
//! live in the insights handlers.

use axum::extract::State;

use tenantwatch_service::dto::{AggregateResponse, ApiResponse};
use tenantwatch_service::services::aggregates;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Distinct departments across the roster
///
/// GET /api/v1/aggregates/departments
pub async fn departments(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<AggregateResponse>>> {
    let values = aggregates::distinct_departments(state.context().read().users());
    Ok(ApiJson(ApiResponse::new(AggregateResponse::new(values))))
}

/// Distinct normalized roles (job titles) across the roster
///
/// GET /api/v1/aggregates/roles
pub async fn roles(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<AggregateResponse>>> {
    let values = aggregates::distinct_roles(state.context().read().users());
    Ok(ApiJson(ApiResponse::new(AggregateResponse::new(values))))
}

/// Distinct group names across the roster
///
/// GET /api/v1/aggregates/groups
pub async fn groups(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<AggregateResponse>>> {
    let values = aggregates::distinct_groups(state.context().read().users());
    Ok(ApiJson(ApiResponse::new(AggregateResponse::new(values))))
}
