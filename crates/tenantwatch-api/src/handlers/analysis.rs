//! Inactivity analysis handler

use axum::extract::{Query, State};
use validator::Validate;

use tenantwatch_service::dto::{ApiResponse, InactiveAnalysisResponse, InactiveQueryParams};

use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Run the inactivity analysis at an optional threshold
///
/// GET /api/v1/analysis/inactive?days=30
pub async fn inactive_users(
    State(state): State<AppState>,
    Query(params): Query<InactiveQueryParams>,
) -> ApiResult<ApiJson<ApiResponse<InactiveAnalysisResponse>>> {
    params.validate()?;

    let analysis = &state.config().analysis;
    let threshold = params.days.unwrap_or(analysis.default_threshold_days);
    if threshold > analysis.max_threshold_days {
        return Err(ApiError::invalid_query(format!(
            "days must not exceed {}",
            analysis.max_threshold_days
        )));
    }

    let mut context = state.context().write();
    let total_users = context.users().len();
    let summaries = context.inactive_users(threshold)?;
    let response = InactiveAnalysisResponse::new(threshold, total_users, summaries);
    Ok(ApiJson(ApiResponse::new(response)))
}
