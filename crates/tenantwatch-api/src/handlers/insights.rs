//! Completion-backed insight handlers

use axum::extract::State;

use tenantwatch_service::dto::{ApiResponse, InsightResponse};
use tenantwatch_service::ServiceError;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Department insight via the completion deployment
///
/// POST /api/v1/insights/departments
pub async fn departments(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<InsightResponse>>> {
    let insights = state
        .insights()
        .ok_or(ServiceError::CompletionUnavailable)?
        .clone();
    // Snapshot the roster so no lock is held across the await
    let users = state.context().read().users().to_vec();
    let values = insights.analyze_departments(&users).await?;
    Ok(ApiJson(ApiResponse::new(InsightResponse { values })))
}

/// Role insight via the completion deployment
///
/// POST /api/v1/insights/roles
pub async fn roles(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<InsightResponse>>> {
    let insights = state
        .insights()
        .ok_or(ServiceError::CompletionUnavailable)?
        .clone();
    let users = state.context().read().users().to_vec();
    let values = insights.analyze_roles(&users).await?;
    Ok(ApiJson(ApiResponse::new(InsightResponse { values })))
}
