//! Pattern-matched query resolver
//!
//! Resolves natural-language and SQL-flavored questions about the dataset by
//! scanning an ordered matcher table over the lowercased query text. The
//! first matching family answers; unrecognized queries fall through to a
//! guidance message. Resolution is total: handler failures render as an
//! error message, never as a panic or a propagated error.

mod extract;
mod handlers;

use chrono::{DateTime, Utc};
use tracing::debug;

use tenantwatch_core::{SignInIndex, UserRecord};

use super::error::ServiceResult;

/// Everything a query handler may consult: the roster, the sign-in index,
/// the inactive subset at the default 30-day threshold, and the evaluation
/// clock.
pub struct QueryData<'a> {
    pub users: &'a [UserRecord],
    pub signins: &'a SignInIndex,
    pub inactive: &'a [UserRecord],
    pub now: DateTime<Utc>,
}

/// A resolved query answer: either a single sentence or a summary line with
/// detail rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Text(String),
    Table { summary: String, rows: Vec<String> },
}

impl QueryResult {
    /// The summary line without any rows.
    #[must_use]
    pub fn summary(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Table { summary, .. } => summary,
        }
    }

    /// Detail rows, empty for plain text answers.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        match self {
            Self::Text(_) => &[],
            Self::Table { rows, .. } => rows,
        }
    }

    /// Flatten to the classic one-string rendering.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Table { summary, rows } => {
                if rows.is_empty() {
                    summary.clone()
                } else {
                    format!("{summary}\n{}", rows.join("\n"))
                }
            }
        }
    }
}

type Predicate = fn(&str) -> bool;
type Handler = for<'a> fn(&str, &QueryData<'a>) -> ServiceResult<QueryResult>;

struct Matcher {
    name: &'static str,
    matches: Predicate,
    handle: Handler,
}

/// Matcher table, tried in order. Specific families sit above liberal ones:
/// the bare LIKE lookup would otherwise swallow the inactivity-filtered LIKE
/// variants, and the count families would shadow the list families.
static MATCHERS: &[Matcher] = &[
    Matcher {
        name: "signed_in_today",
        matches: handlers::matches_signed_in_today,
        handle: handlers::handle_signed_in_today,
    },
    Matcher {
        name: "inactive_detailed_list",
        matches: handlers::matches_inactive_detailed_list,
        handle: handlers::handle_inactive_detailed_list,
    },
    Matcher {
        name: "top_inactive",
        matches: handlers::matches_top_inactive,
        handle: handlers::handle_top_inactive,
    },
    Matcher {
        name: "inactive_count_nl",
        matches: handlers::matches_inactive_count_nl,
        handle: handlers::handle_inactive_count,
    },
    Matcher {
        name: "inactive_count_sql",
        matches: handlers::matches_inactive_count_sql,
        handle: handlers::handle_inactive_count,
    },
    Matcher {
        name: "role_count_sql",
        matches: handlers::matches_role_count_sql,
        handle: handlers::handle_role_count_sql,
    },
    Matcher {
        name: "role_list",
        matches: handlers::matches_role_list,
        handle: handlers::handle_role_list,
    },
    Matcher {
        name: "role_count_nl",
        matches: handlers::matches_role_count_nl,
        handle: handlers::handle_role_count_nl,
    },
    Matcher {
        name: "group_count_sql",
        matches: handlers::matches_group_count_sql,
        handle: handlers::handle_group_count,
    },
    Matcher {
        name: "group_count_nl",
        matches: handlers::matches_group_count_nl,
        handle: handlers::handle_group_count,
    },
    Matcher {
        name: "department_count_sql",
        matches: handlers::matches_department_count_sql,
        handle: handlers::handle_department_count,
    },
    Matcher {
        name: "department_count_nl",
        matches: handlers::matches_department_count_nl,
        handle: handlers::handle_department_count,
    },
    Matcher {
        name: "disabled_count_sql",
        matches: handlers::matches_disabled_count_sql,
        handle: handlers::handle_disabled_count_sql,
    },
    Matcher {
        name: "account_status_nl",
        matches: handlers::matches_account_status_nl,
        handle: handlers::handle_account_status_nl,
    },
    Matcher {
        name: "total_users_sql",
        matches: handlers::matches_total_users_sql,
        handle: handlers::handle_total_users_sql,
    },
    Matcher {
        name: "total_users_nl",
        matches: handlers::matches_total_users_nl,
        handle: handlers::handle_total_users_nl,
    },
    Matcher {
        name: "inactive_like_sql",
        matches: handlers::matches_inactive_like_sql,
        handle: handlers::handle_inactive_like_sql,
    },
    Matcher {
        name: "recent_signin_like_sql",
        matches: handlers::matches_recent_signin_like_sql,
        handle: handlers::handle_recent_signin_like_sql,
    },
    Matcher {
        name: "user_like_sql",
        matches: handlers::matches_user_like_sql,
        handle: handlers::handle_user_like_sql,
    },
    Matcher {
        name: "department_of_user_nl",
        matches: handlers::matches_department_of_user_nl,
        handle: handlers::handle_department_of_user_nl,
    },
    Matcher {
        name: "user_eq_sql",
        matches: handlers::matches_user_eq_sql,
        handle: handlers::handle_user_eq_sql,
    },
    Matcher {
        name: "inactive_membership_nl",
        matches: handlers::matches_inactive_membership_nl,
        handle: handlers::handle_inactive_membership_nl,
    },
    Matcher {
        name: "inactive_by_name_nl",
        matches: handlers::matches_inactive_by_name_nl,
        handle: handlers::handle_inactive_by_name_nl,
    },
    Matcher {
        name: "signin_status_nl",
        matches: handlers::matches_signin_status_nl,
        handle: handlers::handle_signin_status_nl,
    },
];

/// Resolve a query against the current dataset.
///
/// Never fails: handler errors are rendered into the answer text so a bad
/// query cannot take down the caller.
#[must_use]
pub fn resolve_query(query: &str, data: &QueryData<'_>) -> QueryResult {
    if data.users.is_empty() {
        return QueryResult::Text(
            "No user data available. Please refresh the dataset first.".to_string(),
        );
    }

    let lowered = query.to_lowercase();
    for matcher in MATCHERS {
        if (matcher.matches)(&lowered) {
            debug!(matcher = matcher.name, "query matched");
            return match (matcher.handle)(&lowered, data) {
                Ok(result) => result,
                Err(e) => QueryResult::Text(format!("Error processing query: {e}")),
            };
        }
    }

    debug!("query did not match any family");
    QueryResult::Text(format!(
        "Query not recognized: {query}. Please try a more specific query, such as \
         'How many users have no sign-ins in the last 30 days?' or 'How many total groups?'."
    ))
}
