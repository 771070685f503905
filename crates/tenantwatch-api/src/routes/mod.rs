//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{aggregates, analysis, health, insights, query, refresh, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted at the root)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/refresh", post(refresh::refresh))
        .route("/users", get(users::list_users))
        .route("/analysis/inactive", get(analysis::inactive_users))
        .route("/query", post(query::run_query))
        .route("/aggregates/departments", get(aggregates::departments))
        .route("/aggregates/roles", get(aggregates::roles))
        .route("/aggregates/groups", get(aggregates::groups))
        .route("/insights/departments", post(insights::departments))
        .route("/insights/roles", post(insights::roles))
}
