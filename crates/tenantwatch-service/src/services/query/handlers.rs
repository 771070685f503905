//! Query matcher predicates and handlers
//!
//! Each query family is a `matches_*` predicate over the lowercased query
//! text paired with a `handle_*` function that produces the answer. The
//! resolver tries predicates in table order and runs the first that matches,
//! so specific families are listed before liberal ones.

use chrono::Duration;

use tenantwatch_core::{UserRecord, NA};

use super::super::aggregates;
use super::super::error::{ServiceError, ServiceResult};
use super::extract;
use super::{QueryData, QueryResult};

const SQL_COUNT: &str = "select count(*)";

/// Operators accepted in an inactivity-flavored WHERE clause.
const INACTIVE_OPS: [&str; 8] = [
    "<",
    "<=",
    "is null",
    "date_sub",
    "now() - interval",
    "current_date - interval",
    "dateadd",
    "getdate() -",
];

/// Operators accepted in a recent-sign-in WHERE clause.
const RECENT_OPS: [&str; 6] = [
    ">=",
    "date_sub",
    "now() - interval",
    "current_date - interval",
    "dateadd",
    "getdate() -",
];

fn has_signin_column(q: &str) -> bool {
    q.contains("last_sign_in_date") || q.contains("lastsignindate")
}

fn last_signin_display(data: &QueryData<'_>, user_id: &str) -> String {
    data.signins
        .last_signin(user_id)
        .map_or_else(|| NA.to_string(), |ts| ts.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

fn full_detail_row(data: &QueryData<'_>, user: &UserRecord) -> String {
    format!(
        "User: {}, Department: {}, Job Title: {}, Account Enabled: {}, User Type: {}, \
         Last Sign-In Date: {}, Groups: {}",
        user.principal_name,
        user.department_display(),
        user.job_title_display(),
        user.account_enabled,
        user.user_type,
        last_signin_display(data, &user.id),
        user.groups_display()
    )
}

// --- signed in today ---

pub(super) fn matches_signed_in_today(q: &str) -> bool {
    q.contains("signed in today")
        || q.contains("sign-in today")
        || q.contains("signin today")
        || q.contains("sign-in'ed today")
}

pub(super) fn handle_signed_in_today(
    _q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let today = data.now.date_naive();
    let count = data
        .signins
        .iter()
        .filter(|(_, ts)| ts.date_naive() == today)
        .count();
    Ok(QueryResult::Text(format!(
        "There are {count} users who signed in today."
    )))
}

// --- detailed inactive list ---

pub(super) fn matches_inactive_detailed_list(q: &str) -> bool {
    q.contains("list users") && q.contains("no sign-ins") && q.contains("last 30 days")
}

pub(super) fn handle_inactive_detailed_list(
    _q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    if data.inactive.is_empty() {
        return Ok(QueryResult::Text(
            "No users found with no sign-ins in the last 30 days.".to_string(),
        ));
    }
    let rows = data
        .inactive
        .iter()
        .take(10)
        .map(|user| {
            format!(
                "{}, {}, {}, {}, {}, {}",
                user.principal_name,
                user.account_enabled,
                user.job_title_display(),
                user.department_display(),
                user.user_type,
                last_signin_display(data, &user.id)
            )
        })
        .collect();
    Ok(QueryResult::Table {
        summary: format!(
            "There are {} users who have not signed in during the last 30 days.",
            data.inactive.len()
        ),
        rows,
    })
}

// --- top 10 inactive ---

pub(super) fn matches_top_inactive(q: &str) -> bool {
    q.contains("top 10") && q.contains("not signed in")
}

pub(super) fn handle_top_inactive(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    if data.inactive.is_empty() {
        return Ok(QueryResult::Text(
            "No users found with no sign-ins in the last 30 days.".to_string(),
        ));
    }
    let rows = data
        .inactive
        .iter()
        .take(10)
        .enumerate()
        .map(|(i, user)| {
            format!(
                "{}. **{}** - Department: {}",
                i + 1,
                user.principal_name,
                user.department_display()
            )
        })
        .collect();
    Ok(QueryResult::Table {
        summary: "Here are the top 10 users who have not signed in during the last 30 days:"
            .to_string(),
        rows,
    })
}

// --- inactive count, natural language ---

pub(super) fn matches_inactive_count_nl(q: &str) -> bool {
    let negation = q.contains("no sign-ins")
        || q.contains("haven't signed in")
        || q.contains("haven't sign-in")
        || q.contains("haven't signed-in");
    let window = q.contains("last 30 days") || q.contains("past 30 days");
    negation && window
}

pub(super) fn handle_inactive_count(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    Ok(QueryResult::Text(format!(
        "There are {} users who have not signed in during the last 30 days.",
        data.inactive.len()
    )))
}

// --- inactive count, SQL-like ---

pub(super) fn matches_inactive_count_sql(q: &str) -> bool {
    q.contains(SQL_COUNT)
        && has_signin_column(q)
        && q.contains("30 day")
        && INACTIVE_OPS.iter().any(|op| q.contains(op))
}

// --- total users, SQL-like ---

pub(super) fn matches_total_users_sql(q: &str) -> bool {
    q.contains(SQL_COUNT)
        && q.contains("from users")
        && !has_signin_column(q)
        && !q.contains("department")
        && !q.contains("status")
}

pub(super) fn handle_total_users_sql(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    Ok(QueryResult::Text(format!(
        "There are {} users in your tenant.",
        data.users.len()
    )))
}

// --- total users, natural language ---

pub(super) fn matches_total_users_nl(q: &str) -> bool {
    q.contains("total users") || q.contains("how many users") || q.contains("count all users")
}

pub(super) fn handle_total_users_nl(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    Ok(QueryResult::Text(format!(
        "There are a total of {} users in your tenant.",
        data.users.len()
    )))
}

// --- role count, SQL-like ---

pub(super) fn matches_role_count_sql(q: &str) -> bool {
    q.contains("select count(distinct role)") && q.contains("from roles")
}

pub(super) fn handle_role_count_sql(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    let roles = aggregates::distinct_roles(data.users);
    Ok(QueryResult::Text(format!(
        "Number of distinct job titles: {}",
        roles.len()
    )))
}

// --- role list ---

pub(super) fn matches_role_list(q: &str) -> bool {
    q.contains("list all distinct roles")
}

pub(super) fn handle_role_list(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    let roles = aggregates::distinct_roles(data.users);
    if roles.is_empty() {
        return Ok(QueryResult::Text(
            "No distinct roles found in the dataset.".to_string(),
        ));
    }
    let rows = roles
        .iter()
        .enumerate()
        .map(|(i, role)| format!("{}. {role}", i + 1))
        .collect();
    Ok(QueryResult::Table {
        summary: "Distinct roles (job titles) in the dataset:".to_string(),
        rows,
    })
}

// --- role count, natural language ---

pub(super) fn matches_role_count_nl(q: &str) -> bool {
    q.contains("how many total roles") || q.contains("distinct roles")
}

pub(super) fn handle_role_count_nl(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    let roles = aggregates::distinct_roles(data.users);
    Ok(QueryResult::Text(format!(
        "There are {} distinct roles (job titles) in the dataset.",
        roles.len()
    )))
}

// --- group count ---

pub(super) fn matches_group_count_sql(q: &str) -> bool {
    q.contains(SQL_COUNT) && q.contains("from groups")
}

pub(super) fn matches_group_count_nl(q: &str) -> bool {
    q.contains("groups are there") || q.contains("how many total groups")
}

pub(super) fn handle_group_count(_q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    let groups = aggregates::distinct_groups(data.users);
    Ok(QueryResult::Text(format!(
        "There are {} unique groups in your tenant.",
        groups.len()
    )))
}

// --- department count ---

pub(super) fn matches_department_count_sql(q: &str) -> bool {
    q.contains("select count(distinct department)") && q.contains("from users")
}

pub(super) fn matches_department_count_nl(q: &str) -> bool {
    q.contains("how many total departments") || q.contains("departments are there")
}

pub(super) fn handle_department_count(
    _q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let departments = aggregates::distinct_departments(data.users);
    Ok(QueryResult::Text(format!(
        "There are {} unique departments in your tenant.",
        departments.len()
    )))
}

// --- disabled users, SQL-like ---

pub(super) fn matches_disabled_count_sql(q: &str) -> bool {
    q.contains(SQL_COUNT) && q.contains("from users") && q.contains("status = 'disabled'")
}

pub(super) fn handle_disabled_count_sql(
    _q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    Ok(QueryResult::Text(format!(
        "There are {} disabled users in your tenant.",
        aggregates::disabled_count(data.users)
    )))
}

// --- account status, natural language ---

pub(super) fn matches_account_status_nl(q: &str) -> bool {
    q.contains("how many disabled users") || q.contains("active and disabled users")
}

pub(super) fn handle_account_status_nl(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let disabled = aggregates::disabled_count(data.users);
    if q.contains("active and disabled users") {
        let active = aggregates::enabled_count(data.users);
        return Ok(QueryResult::Text(format!(
            "The total number of active and disabled users in your tenant is as follows:\n\
             - Active Users: {active}\n\
             - Disabled Users: {disabled}"
        )));
    }
    Ok(QueryResult::Text(format!(
        "There are {disabled} disabled users in your tenant."
    )))
}

// --- inactive user lookup, SQL-like LIKE ---

pub(super) fn matches_inactive_like_sql(q: &str) -> bool {
    q.contains("select")
        && q.contains("from users")
        && q.contains("user_principal_name like")
        && has_signin_column(q)
        && q.contains("30 day")
        && (q.contains('<') || q.contains("<=") || q.contains("is null"))
}

pub(super) fn handle_inactive_like_sql(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let term = extract::like_term(q)
        .ok_or_else(|| ServiceError::validation("could not extract LIKE search term"))?;
    let matching: Vec<&UserRecord> = data
        .inactive
        .iter()
        .filter(|u| u.principal_matches(term))
        .collect();
    if matching.is_empty() {
        return Ok(QueryResult::Text(format!(
            "No inactive users found matching '{term}'."
        )));
    }
    let rows = matching
        .iter()
        .map(|user| {
            format!(
                "User: {}, Department: {}, Job Title: {}, Last Sign-In Date: {}",
                user.principal_name,
                user.department_display(),
                user.job_title_display(),
                last_signin_display(data, &user.id)
            )
        })
        .collect();
    Ok(QueryResult::Table {
        summary: format!(
            "Found {} inactive user(s) matching '{term}':",
            matching.len()
        ),
        rows,
    })
}

// --- recent sign-in lookup, SQL-like LIKE with time frame ---

pub(super) fn matches_recent_signin_like_sql(q: &str) -> bool {
    q.contains("select")
        && q.contains("from users")
        && q.contains("user_principal_name like")
        && has_signin_column(q)
        && RECENT_OPS.iter().any(|op| q.contains(op))
}

pub(super) fn handle_recent_signin_like_sql(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let term = extract::like_term(q)
        .ok_or_else(|| ServiceError::validation("could not extract LIKE search term"))?;
    let days = extract::interval_days(q)?;
    let cutoff = data.now - Duration::days(days);

    let rows: Vec<String> = data
        .users
        .iter()
        .filter(|u| u.principal_matches(term))
        .filter_map(|user| {
            let last = data.signins.last_signin(&user.id)?;
            (last >= cutoff).then(|| {
                format!(
                    "User: {}, Last Sign-In Date: {}",
                    user.principal_name,
                    last.format("%Y-%m-%dT%H:%M:%SZ")
                )
            })
        })
        .collect();

    if rows.is_empty() {
        return Ok(QueryResult::Text(format!(
            "No users matching '{term}' have signed in within the last {days} days."
        )));
    }
    Ok(QueryResult::Table {
        summary: format!(
            "Found {} user(s) matching '{term}' who signed in within the last {days} days:",
            rows.len()
        ),
        rows,
    })
}

// --- user lookup, SQL-like LIKE ---

pub(super) fn matches_user_like_sql(q: &str) -> bool {
    q.contains("select") && q.contains("from users") && q.contains("user_principal_name like")
}

pub(super) fn handle_user_like_sql(q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    let term = extract::like_term(q)
        .ok_or_else(|| ServiceError::validation("could not extract LIKE search term"))?;
    lookup_by_principal(data, term, &format!("No users found matching '{term}'."))
}

// --- department of a named user ---

pub(super) fn matches_department_of_user_nl(q: &str) -> bool {
    q.contains("is from which department") || q.contains("whcih department")
}

pub(super) fn handle_department_of_user_nl(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let term = extract::department_subject(q)
        .ok_or_else(|| ServiceError::validation("could not extract user name"))?;
    lookup_by_principal(data, &term, &format!("No users found matching '{term}'."))
}

// --- user lookup, SQL-like equality ---

pub(super) fn matches_user_eq_sql(q: &str) -> bool {
    q.contains("select")
        && q.contains("from users")
        && (q.contains("name =") || q.contains("username =") || q.contains("email ="))
}

pub(super) fn handle_user_eq_sql(q: &str, data: &QueryData<'_>) -> ServiceResult<QueryResult> {
    let term = extract::eq_term(q)
        .ok_or_else(|| ServiceError::validation("could not extract search term"))?;
    lookup_by_principal(
        data,
        term,
        &format!("No users found with name, username, or email matching '{term}'."),
    )
}

fn lookup_by_principal(
    data: &QueryData<'_>,
    term: &str,
    empty_message: &str,
) -> ServiceResult<QueryResult> {
    let rows: Vec<String> = data
        .users
        .iter()
        .filter(|u| u.principal_matches(term))
        .map(|u| full_detail_row(data, u))
        .collect();
    if rows.is_empty() {
        return Ok(QueryResult::Text(empty_message.to_string()));
    }
    Ok(QueryResult::Table {
        summary: format!("Found {} user(s) matching '{term}':", rows.len()),
        rows,
    })
}

// --- membership in the inactive list ---

pub(super) fn matches_inactive_membership_nl(q: &str) -> bool {
    (q.contains("is ") && q.contains(" in ") && q.contains("list"))
        || (q.contains("is there any user named") && q.contains("list"))
}

pub(super) fn handle_inactive_membership_nl(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let term = extract::membership_subject(q)
        .ok_or_else(|| ServiceError::validation("could not extract user name"))?;
    let found = data.inactive.iter().any(|u| u.principal_matches(&term));
    let (verdict, verb) = if found { ("Yes", "is") } else { ("No", "is not") };
    Ok(QueryResult::Text(format!(
        "{verdict}, '{term}' {verb} in the list of users who have not signed in during the last 30 days."
    )))
}

// --- inactive users by name, natural language ---

pub(super) fn matches_inactive_by_name_nl(q: &str) -> bool {
    (q.contains("inactive users") && (q.contains("name") || q.contains("named")))
        || (q.contains("list all users who have not signed in") && q.contains("name"))
}

pub(super) fn handle_inactive_by_name_nl(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let Some(term) = extract::named_subject(q) else {
        return Ok(QueryResult::Text(
            "Unable to extract the name from the query. Please try rephrasing, e.g., \
             'List all inactive users with the name Santhosh'."
                .to_string(),
        ));
    };
    if data.inactive.is_empty() {
        return Ok(QueryResult::Text(
            "No users found with no sign-ins in the last 30 days.".to_string(),
        ));
    }
    let rows: Vec<String> = data
        .inactive
        .iter()
        .filter(|u| u.principal_matches(&term))
        .map(|user| {
            format!(
                "User: {}, Department: {}, Job Title: {}, Last Sign-In Date: {}",
                user.principal_name,
                user.department_display(),
                user.job_title_display(),
                last_signin_display(data, &user.id)
            )
        })
        .collect();
    if rows.is_empty() {
        return Ok(QueryResult::Text(format!(
            "No inactive users found with the name '{term}'."
        )));
    }
    Ok(QueryResult::Table {
        summary: format!("Found {} inactive user(s) with the name '{term}':", rows.len()),
        rows,
    })
}

// --- sign-in status for a named user ---

pub(super) fn matches_signin_status_nl(q: &str) -> bool {
    q.contains("sign-in'ed") || q.contains("signed in")
}

pub(super) fn handle_signin_status_nl(
    q: &str,
    data: &QueryData<'_>,
) -> ServiceResult<QueryResult> {
    let Some(term) = extract::signin_subject(q) else {
        return Ok(QueryResult::Text(
            "Unable to extract the name from the query. Please try rephrasing, e.g., \
             'Have Santhosh sign-in'ed?'"
                .to_string(),
        ));
    };
    let cutoff = data.now - Duration::days(30);
    let rows: Vec<String> = data
        .users
        .iter()
        .filter(|u| u.principal_matches(&term))
        .map(|user| match data.signins.last_signin(&user.id) {
            Some(last) if last >= cutoff => format!(
                "User: {}, Last Sign-In Date: {} (within the last 30 days)",
                user.principal_name,
                last.format("%Y-%m-%dT%H:%M:%SZ")
            ),
            Some(last) => format!(
                "User: {}, Last Sign-In Date: {} (more than 30 days ago)",
                user.principal_name,
                last.format("%Y-%m-%dT%H:%M:%SZ")
            ),
            None => format!(
                "User: {}, Last Sign-In Date: N/A (never signed in)",
                user.principal_name
            ),
        })
        .collect();

    if rows.is_empty() {
        return Ok(QueryResult::Text(format!(
            "No users found matching '{term}'."
        )));
    }
    Ok(QueryResult::Table {
        summary: format!("Sign-in status for user(s) matching '{term}':"),
        rows,
    })
}
