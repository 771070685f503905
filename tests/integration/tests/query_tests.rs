//! Query resolver integration tests
//!
//! Drives the resolver over the standard roster with realistic natural
//! language and SQL-flavored questions, including the malformed input
//! battery that must never error out of the resolver.

use chrono::{DateTime, Utc};

use integration_tests::fixtures::{fixed_now, standard_index, standard_roster};
use tenantwatch_core::{SignInIndex, UserRecord};
use tenantwatch_service::{find_inactive, resolve_query, QueryData, QueryResult};

/// Roster entries that are inactive at the default 30-day threshold,
/// in roster order.
fn inactive_roster(users: &[UserRecord], index: &SignInIndex, now: DateTime<Utc>) -> Vec<UserRecord> {
    let inactive = find_inactive(users, index, 30, now).unwrap();
    users
        .iter()
        .filter(|u| inactive.iter().any(|i| i.user_id == u.id))
        .cloned()
        .collect()
}

struct Dataset {
    users: Vec<UserRecord>,
    index: SignInIndex,
    inactive: Vec<UserRecord>,
}

impl Dataset {
    fn standard() -> Self {
        let users = standard_roster();
        let index = standard_index();
        let inactive = inactive_roster(&users, &index, fixed_now());
        Self { users, index, inactive }
    }

    fn query_data(&self) -> QueryData<'_> {
        QueryData {
            users: &self.users,
            signins: &self.index,
            inactive: &self.inactive,
            now: fixed_now(),
        }
    }

    fn ask(&self, query: &str) -> QueryResult {
        resolve_query(query, &self.query_data())
    }
}

#[test]
fn test_empty_dataset_short_circuits() {
    let empty = Dataset {
        users: Vec::new(),
        index: SignInIndex::empty(),
        inactive: Vec::new(),
    };
    let result = empty.ask("How many total groups?");
    assert_eq!(
        result.summary(),
        "No user data available. Please refresh the dataset first."
    );
}

#[test]
fn test_inactive_count_natural_language() {
    let data = Dataset::standard();
    let result = data.ask("How many users have no sign-ins in the last 30 days?");
    assert_eq!(
        result.summary(),
        "There are 2 users who have not signed in during the last 30 days."
    );
}

#[test]
fn test_inactive_count_sql_count() {
    let data = Dataset::standard();
    let result = data.ask(
        "SELECT COUNT(*) FROM users WHERE last_sign_in_date < NOW() - INTERVAL 30 DAY",
    );
    assert_eq!(
        result.summary(),
        "There are 2 users who have not signed in during the last 30 days."
    );
}

#[test]
fn test_total_users_natural_language() {
    let data = Dataset::standard();
    let result = data.ask("How many users are there in total?");
    assert_eq!(
        result.summary(),
        "There are a total of 3 users in your tenant."
    );
}

#[test]
fn test_group_count_over_overlapping_memberships() {
    // {Group A, Group B}, {Group B, Group C}, {} hold three unique groups.
    let data = Dataset::standard();
    let result = data.ask("How many total groups?");
    assert_eq!(result.summary(), "There are 3 unique groups in your tenant.");
}

#[test]
fn test_role_count_merges_misspelled_titles() {
    // "Security Engineer" and "Security Engeer" normalize to one role.
    let data = Dataset::standard();
    let result = data.ask("SELECT COUNT(DISTINCT role) FROM roles");
    assert_eq!(result.summary(), "Number of distinct job titles: 1");
}

#[test]
fn test_role_list_wins_over_role_count() {
    // The list query also contains "distinct roles"; it must reach the list
    // family, not the count family.
    let data = Dataset::standard();
    let result = data.ask("List all distinct roles in the dataset");
    assert_eq!(result.summary(), "Distinct roles (job titles) in the dataset:");
    assert_eq!(result.rows(), ["1. security engineer"]);
}

#[test]
fn test_top_inactive_listing() {
    let data = Dataset::standard();
    let result = data.ask("Show the top 10 users who have not signed in recently");
    assert_eq!(
        result.summary(),
        "Here are the top 10 users who have not signed in during the last 30 days:"
    );
    assert_eq!(
        result.rows(),
        [
            "1. **alice.johnson@contoso.com** - Department: Sales",
            "2. **bob.smith@contoso.com** - Department: N/A",
        ]
    );
}

#[test]
fn test_signed_in_today_counts_only_today() {
    // Nobody in the standard data signed in on the evaluation day itself.
    let data = Dataset::standard();
    let result = data.ask("How many users signed in today?");
    assert_eq!(result.summary(), "There are 0 users who signed in today.");
}

#[test]
fn test_departments_count() {
    let data = Dataset::standard();
    let result = data.ask("How many total departments?");
    assert_eq!(
        result.summary(),
        "There are 2 unique departments in your tenant."
    );
}

#[test]
fn test_unrecognized_query_echoes_original_casing() {
    let data = Dataset::standard();
    let result = data.ask("Tell Me Something Interesting");
    assert_eq!(
        result.summary(),
        "Query not recognized: Tell Me Something Interesting. Please try a more specific \
         query, such as 'How many users have no sign-ins in the last 30 days?' or 'How \
         many total groups?'."
    );
}

#[test]
fn test_resolver_is_total_over_malformed_input() {
    // None of these may panic or escape as an error; every one must come
    // back as some text or table answer.
    let data = Dataset::standard();
    let battery = [
        "",
        "   ",
        "SELECT * FROM users WHERE user_principal_name LIKE '%",
        "select count(*) from users where last_sign_in_date < now() - interval 'banana' day",
        "list inactive users with name containing",
        "????",
        "SELECT COUNT(*) FROM users WHERE last_sign_in_date < DATEADD(day, -abc, GETDATE())",
        "\u{1f4a5} unicode query \u{1f4a5}",
    ];
    for query in battery {
        let result = data.ask(query);
        assert!(
            !result.summary().is_empty(),
            "query {query:?} produced an empty answer"
        );
    }
}

#[test]
fn test_malformed_interval_reports_error_text() {
    let data = Dataset::standard();
    let result = data.ask(
        "SELECT * FROM users WHERE user_principal_name LIKE '%alice%' \
         AND last_sign_in_date >= NOW() - INTERVAL 'oops' DAY",
    );
    assert!(
        result.summary().starts_with("Error processing query:"),
        "got: {}",
        result.summary()
    );
}

#[test]
fn test_like_lookup_returns_matching_rows() {
    let data = Dataset::standard();
    let result = data.ask("SELECT * FROM users WHERE user_principal_name LIKE '%alice%'");
    assert_eq!(result.summary(), "Found 1 user(s) matching 'alice':");
    assert_eq!(result.rows().len(), 1);
    assert!(result.rows()[0].contains("alice.johnson@contoso.com"));
}

#[test]
fn test_inactive_membership_check() {
    let data = Dataset::standard();

    let result = data.ask("Is alice in the list of users who have not signed in?");
    assert_eq!(
        result.summary(),
        "Yes, 'alice' is in the list of users who have not signed in during the last 30 days."
    );

    let result = data.ask("Is santhosh in the list of users who have not signed in?");
    assert_eq!(
        result.summary(),
        "No, 'santhosh' is not in the list of users who have not signed in during the last 30 days."
    );
}
