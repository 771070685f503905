//! Query resolver handler

use axum::{extract::State, Json};
use chrono::Utc;
use validator::Validate;

use tenantwatch_service::dto::{ApiResponse, QueryRequest, QueryResponse};
use tenantwatch_service::{resolve_query, QueryData};

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Resolve a natural-language or SQL-flavored query
///
/// POST /api/v1/query
pub async fn run_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<ApiJson<ApiResponse<QueryResponse>>> {
    request.validate()?;

    let default_threshold = state.config().analysis.default_threshold_days;
    let mut context = state.context().write();
    let inactive = context.inactive_roster(default_threshold)?;

    let data = QueryData {
        users: context.users(),
        signins: context.signin_index(),
        inactive: &inactive,
        now: Utc::now(),
    };
    let result = resolve_query(&request.query, &data);

    Ok(ApiJson(ApiResponse::new(QueryResponse::from(result))))
}
