//! Health check handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether a dataset has been loaded or refreshed yet.
    pub has_data: bool,
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let context = state.context().read();
    Json(HealthResponse {
        status: "ok",
        has_data: context.has_data(),
        last_refreshed: context.last_refreshed(),
    })
}
