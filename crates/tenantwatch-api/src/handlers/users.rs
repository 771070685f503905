//! Roster handlers

use axum::extract::State;

use tenantwatch_service::dto::{ApiResponse, RosterUserResponse};

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List the current roster with latest sign-in per user
///
/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<Vec<RosterUserResponse>>>> {
    let context = state.context().read();
    let users = context
        .users()
        .iter()
        .map(|u| RosterUserResponse::from_record(u, context.signin_index()))
        .collect();
    Ok(ApiJson(ApiResponse::new(users)))
}
