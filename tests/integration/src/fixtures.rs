//! Test fixtures and data generators
//!
//! Provides reusable rosters and sign-in data for integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use tenantwatch_core::{SignInIndex, SignInRecord, UserRecord};

/// A fixed evaluation clock so day arithmetic is deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
}

/// Build a user with the commonly varied fields.
pub fn user(
    id: &str,
    principal_name: &str,
    job_title: Option<&str>,
    department: Option<&str>,
    groups: &[&str],
) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        principal_name: principal_name.to_string(),
        display_name: principal_name
            .split('@')
            .next()
            .unwrap_or(principal_name)
            .to_string(),
        job_title: job_title.map(String::from),
        department: department.map(String::from),
        account_enabled: true,
        user_type: "Member".to_string(),
        groups: groups.iter().map(|g| (*g).to_string()).collect(),
    }
}

/// A sign-in `days_ago` days before [`fixed_now`].
pub fn signin(user_id: &str, days_ago: i64) -> SignInRecord {
    SignInRecord::new(
        user_id,
        fixed_now() - Duration::days(days_ago),
        format!("User {user_id}"),
    )
}

/// The standard analysis roster: one active user, one stale user, one user
/// who never signed in, plus group overlap for aggregate scenarios.
pub fn standard_roster() -> Vec<UserRecord> {
    vec![
        user(
            "u1",
            "santhosh.kumar@contoso.com",
            Some("Security Engineer"),
            Some("Security"),
            &["Group A", "Group B"],
        ),
        user(
            "u2",
            "alice.johnson@contoso.com",
            Some("Security Engeer"),
            Some("Sales"),
            &["Group B", "Group C"],
        ),
        user("u3", "bob.smith@contoso.com", None, None, &[]),
    ]
}

/// Sign-ins matching [`standard_roster`]: u1 active (2 days ago), u2 stale
/// (45 days ago), u3 absent entirely.
pub fn standard_signins() -> Vec<SignInRecord> {
    vec![signin("u1", 2), signin("u2", 45)]
}

/// Index built from [`standard_signins`].
pub fn standard_index() -> SignInIndex {
    SignInIndex::from_records(standard_signins())
}
