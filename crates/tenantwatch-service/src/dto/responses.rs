//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tenantwatch_core::{DaysInactive, InactiveUserSummary, SignInIndex, UserRecord};

use crate::services::{QueryResult, RefreshOutcome};

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Resolved query answer
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Summary sentence, always present.
    pub summary: String,
    /// Detail rows for table-shaped answers; empty otherwise.
    pub rows: Vec<String>,
}

impl From<QueryResult> for QueryResponse {
    fn from(result: QueryResult) -> Self {
        match result {
            QueryResult::Text(summary) => Self {
                summary,
                rows: Vec::new(),
            },
            QueryResult::Table { summary, rows } => Self { summary, rows },
        }
    }
}

/// One inactive user in an analysis response
#[derive(Debug, Serialize)]
pub struct InactiveUserResponse {
    pub user_id: String,
    pub display_name: String,
    /// Days since last sign-in; `null` when no sign-in was ever recorded.
    pub days_inactive: Option<i64>,
}

impl From<&InactiveUserSummary> for InactiveUserResponse {
    fn from(summary: &InactiveUserSummary) -> Self {
        Self {
            user_id: summary.user_id.clone(),
            display_name: summary.display_name.clone(),
            days_inactive: match summary.days_inactive {
                DaysInactive::Days(days) => Some(days),
                DaysInactive::NeverSignedIn => None,
            },
        }
    }
}

/// Inactivity analysis result with headline metrics
#[derive(Debug, Serialize)]
pub struct InactiveAnalysisResponse {
    pub threshold_days: u32,
    pub total_users: usize,
    pub inactive_count: usize,
    /// Share of the roster that is inactive, in percent.
    pub percentage: f64,
    pub users: Vec<InactiveUserResponse>,
}

impl InactiveAnalysisResponse {
    #[must_use]
    pub fn new(threshold_days: u32, total_users: usize, summaries: &[InactiveUserSummary]) -> Self {
        let inactive_count = summaries.len();
        let percentage = if total_users == 0 {
            0.0
        } else {
            inactive_count as f64 / total_users as f64 * 100.0
        };
        Self {
            threshold_days,
            total_users,
            inactive_count,
            percentage,
            users: summaries.iter().map(InactiveUserResponse::from).collect(),
        }
    }
}

/// One roster user with their latest sign-in
#[derive(Debug, Serialize)]
pub struct RosterUserResponse {
    pub id: String,
    pub principal_name: String,
    pub display_name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub account_enabled: bool,
    pub user_type: String,
    pub groups: Vec<String>,
    pub last_signin: Option<DateTime<Utc>>,
}

impl RosterUserResponse {
    #[must_use]
    pub fn from_record(user: &UserRecord, index: &SignInIndex) -> Self {
        Self {
            id: user.id.clone(),
            principal_name: user.principal_name.clone(),
            display_name: user.display_name.clone(),
            job_title: user.job_title.clone(),
            department: user.department.clone(),
            account_enabled: user.account_enabled,
            user_type: user.user_type.clone(),
            groups: user.groups.clone(),
            last_signin: index.last_signin(&user.id),
        }
    }
}

/// Distinct-value aggregate (departments, roles, groups)
#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub count: usize,
    pub values: Vec<String>,
}

impl AggregateResponse {
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self {
            count: values.len(),
            values,
        }
    }
}

/// Completion-backed insight result
#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub values: Vec<String>,
}

/// Outcome of a dataset refresh
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub users_fetched: usize,
    pub signins_indexed: usize,
    pub signin_fetch_ok: bool,
    pub refreshed_at: DateTime<Utc>,
}

impl From<RefreshOutcome> for RefreshResponse {
    fn from(outcome: RefreshOutcome) -> Self {
        Self {
            users_fetched: outcome.users_fetched,
            signins_indexed: outcome.signins_indexed,
            signin_fetch_ok: outcome.signin_fetch_ok,
            refreshed_at: Utc::now(),
        }
    }
}
