//! Dataset aggregates
//!
//! Deterministic rollups over the roster: distinct roles, groups,
//! departments, and account status counts.

use std::collections::BTreeSet;

use tenantwatch_core::{is_valid_role, normalize_role, UserRecord};

/// Distinct normalized job titles, filtered of junk entries, sorted.
#[must_use]
pub fn distinct_roles(users: &[UserRecord]) -> Vec<String> {
    let mut roles = BTreeSet::new();
    for user in users {
        if let Some(normalized) = normalize_role(user.job_title.as_deref()) {
            roles.insert(normalized);
        }
    }
    roles.into_iter().filter(|r| is_valid_role(r)).collect()
}

/// Distinct group names across the roster, sorted.
#[must_use]
pub fn distinct_groups(users: &[UserRecord]) -> Vec<String> {
    let mut groups = BTreeSet::new();
    for user in users {
        for group in &user.groups {
            if !group.is_empty() {
                groups.insert(group.clone());
            }
        }
    }
    groups.into_iter().collect()
}

/// Distinct department names across the roster, sorted.
#[must_use]
pub fn distinct_departments(users: &[UserRecord]) -> Vec<String> {
    let mut departments = BTreeSet::new();
    for user in users {
        if let Some(department) = &user.department {
            if !department.is_empty() {
                departments.insert(department.clone());
            }
        }
    }
    departments.into_iter().collect()
}

/// Count of enabled accounts.
#[must_use]
pub fn enabled_count(users: &[UserRecord]) -> usize {
    users.iter().filter(|u| u.account_enabled).count()
}

/// Count of disabled accounts.
#[must_use]
pub fn disabled_count(users: &[UserRecord]) -> usize {
    users.iter().filter(|u| !u.account_enabled).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, title: Option<&str>, dept: Option<&str>, groups: &[&str]) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            principal_name: format!("{id}@contoso.com"),
            display_name: id.to_string(),
            job_title: title.map(String::from),
            department: dept.map(String::from),
            account_enabled: true,
            user_type: "Member".to_string(),
            groups: groups.iter().map(|g| (*g).to_string()).collect(),
        }
    }

    #[test]
    fn test_distinct_roles_normalizes_typos() {
        let users = vec![
            user("u1", Some("Security Engineer"), None, &[]),
            user("u2", Some("security engeer"), None, &[]),
            user("u3", Some("HR Specialist"), None, &[]),
            user("u4", None, None, &[]),
        ];
        let roles = distinct_roles(&users);
        assert_eq!(roles, vec!["hr specialist", "security engineer"]);
    }

    #[test]
    fn test_distinct_groups_unions_memberships() {
        let users = vec![
            user("u1", None, None, &["Group A", "Group B"]),
            user("u2", None, None, &["Group B", "Group C"]),
            user("u3", None, None, &[]),
        ];
        let groups = distinct_groups(&users);
        assert_eq!(groups, vec!["Group A", "Group B", "Group C"]);
    }

    #[test]
    fn test_distinct_departments_skips_missing() {
        let users = vec![
            user("u1", None, Some("Sales"), &[]),
            user("u2", None, Some("Engineering"), &[]),
            user("u3", None, Some("Sales"), &[]),
            user("u4", None, None, &[]),
        ];
        let departments = distinct_departments(&users);
        assert_eq!(departments, vec!["Engineering", "Sales"]);
    }

    #[test]
    fn test_account_status_counts() {
        let mut users = vec![user("u1", None, None, &[]), user("u2", None, None, &[])];
        users[1].account_enabled = false;
        assert_eq!(enabled_count(&users), 1);
        assert_eq!(disabled_count(&users), 1);
    }
}
