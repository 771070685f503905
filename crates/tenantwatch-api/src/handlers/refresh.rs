//! Dataset refresh handler

use axum::extract::State;

use tenantwatch_service::dto::{ApiResponse, RefreshResponse};

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Fetch a fresh roster and sign-in window, then swap the dataset
///
/// POST /api/v1/refresh
pub async fn refresh(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<RefreshResponse>>> {
    let outcome = state.refresh_service().refresh().await?;
    Ok(ApiJson(ApiResponse::new(RefreshResponse::from(outcome))))
}
