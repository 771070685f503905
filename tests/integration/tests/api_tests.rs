//! REST API integration tests
//!
//! Drives the full Axum application through `tower::ServiceExt::oneshot`
//! with a stub directory fetcher, so refresh, analysis, and query flows run
//! end to end without any network access.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use integration_tests::fixtures::{standard_roster, user};
use integration_tests::helpers::{StubFetcher, TestApp};
use tenantwatch_core::SignInRecord;

/// Sign-ins relative to the real clock, since the handlers evaluate
/// inactivity against `Utc::now()`.
fn live_signins() -> Vec<SignInRecord> {
    vec![
        SignInRecord::new("u1", Utc::now() - Duration::days(2), "Santhosh"),
        SignInRecord::new("u2", Utc::now() - Duration::days(45), "Alice"),
    ]
}

fn standard_app() -> TestApp {
    TestApp::new(StubFetcher {
        roster: standard_roster(),
        signins: live_signins(),
        fail_signins: false,
    })
    .unwrap()
}

#[tokio::test]
async fn test_health_reports_no_data_before_refresh() {
    let app = standard_app();

    let (status, body) = app.get("/health").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["has_data"], false);
    assert!(body["last_refreshed"].is_null());
}

#[tokio::test]
async fn test_refresh_loads_roster_and_signins() {
    let app = standard_app();

    let (status, body) = app.post("/api/v1/refresh", json!({})).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["users_fetched"], 3);
    assert_eq!(body["data"]["signins_indexed"], 2);
    assert_eq!(body["data"]["signin_fetch_ok"], true);

    let (status, body) = app.get("/api/v1/users").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["principal_name"], "santhosh.kumar@contoso.com");
    assert!(users[0]["last_signin"].is_string());
    assert!(users[2]["last_signin"].is_null());

    let (_, body) = app.get("/health").await.unwrap();
    assert_eq!(body["has_data"], true);
    assert!(body["last_refreshed"].is_string());
}

#[tokio::test]
async fn test_refresh_degrades_when_signin_fetch_fails() {
    let app = TestApp::new(StubFetcher {
        roster: standard_roster(),
        signins: Vec::new(),
        fail_signins: true,
    })
    .unwrap();

    // The roster still loads; the sign-in window just stays empty.
    let (status, body) = app.post("/api/v1/refresh", json!({})).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["users_fetched"], 3);
    assert_eq!(body["data"]["signin_fetch_ok"], false);
}

#[tokio::test]
async fn test_inactive_analysis_at_default_threshold() {
    let app = standard_app();
    app.post("/api/v1/refresh", json!({})).await.unwrap();

    let (status, body) = app.get("/api/v1/analysis/inactive").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["threshold_days"], 30);
    assert_eq!(body["data"]["total_users"], 3);
    assert_eq!(body["data"]["inactive_count"], 2);

    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users[0]["user_id"], "u2");
    assert_eq!(users[0]["days_inactive"], 45);
    assert_eq!(users[1]["user_id"], "u3");
    assert!(users[1]["days_inactive"].is_null());
}

#[tokio::test]
async fn test_inactive_analysis_with_custom_threshold() {
    let app = standard_app();
    app.post("/api/v1/refresh", json!({})).await.unwrap();

    // At 60 days only the never-signed-in user remains.
    let (status, body) = app.get("/api/v1/analysis/inactive?days=60").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["inactive_count"], 1);
    assert_eq!(body["data"]["users"][0]["user_id"], "u3");
}

#[tokio::test]
async fn test_inactive_analysis_rejects_out_of_range_days() {
    let app = standard_app();

    let (status, body) = app.get("/api/v1/analysis/inactive?days=0").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = app.get("/api/v1/analysis/inactive?days=120").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_before_refresh_asks_for_data() {
    let app = standard_app();

    let (status, body) = app
        .post("/api/v1/query", json!({"query": "How many total groups?"}))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["summary"],
        "No user data available. Please refresh the dataset first."
    );
    assert_eq!(body["data"]["rows"], json!([]));
}

#[tokio::test]
async fn test_query_resolves_against_refreshed_dataset() {
    let app = standard_app();
    app.post("/api/v1/refresh", json!({})).await.unwrap();

    let (status, body) = app
        .post(
            "/api/v1/query",
            json!({"query": "How many users have no sign-ins in the last 30 days?"}),
        )
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["summary"],
        "There are 2 users who have not signed in during the last 30 days."
    );

    let (status, body) = app
        .post(
            "/api/v1/query",
            json!({"query": "Show the top 10 users who have not signed in recently"}),
        )
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], "1. **alice.johnson@contoso.com** - Department: Sales");
}

#[tokio::test]
async fn test_query_rejects_empty_text() {
    let app = standard_app();

    let (status, body) = app
        .post("/api/v1/query", json!({"query": ""}))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_aggregates_endpoints() {
    let app = standard_app();
    app.post("/api/v1/refresh", json!({})).await.unwrap();

    let (status, body) = app.get("/api/v1/aggregates/groups").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 3);
    assert_eq!(body["data"]["values"], json!(["Group A", "Group B", "Group C"]));

    let (status, body) = app.get("/api/v1/aggregates/roles").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    // The misspelled title normalizes into the correctly spelled role.
    assert_eq!(body["data"]["values"], json!(["security engineer"]));

    let (status, body) = app.get("/api/v1/aggregates/departments").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["values"], json!(["Sales", "Security"]));
}

#[tokio::test]
async fn test_insights_unavailable_without_completion_config() {
    let app = standard_app();
    app.post("/api/v1/refresh", json!({})).await.unwrap();

    let (status, body) = app
        .post("/api/v1/insights/departments", json!({}))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "COMPLETION_UNAVAILABLE");
}

#[tokio::test]
async fn test_refresh_replaces_previous_dataset() {
    let app = TestApp::new(StubFetcher {
        roster: vec![user("u9", "carol.wu@contoso.com", None, None, &[])],
        signins: vec![SignInRecord::new("u9", Utc::now(), "Carol")],
        fail_signins: false,
    })
    .unwrap();

    app.post("/api/v1/refresh", json!({})).await.unwrap();
    let (_, body) = app.get("/api/v1/users").await.unwrap();
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], "u9");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = standard_app();
    let (status, _) = app.get("/api/v1/nope").await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
}
