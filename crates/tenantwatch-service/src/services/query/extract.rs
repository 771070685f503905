//! Anchor-based term extraction
//!
//! Search terms and day counts are pulled out of the lowercased query text
//! by splitting around fixed anchor phrases. Queries that carry an anchor
//! but no extractable term fail extraction rather than matching everything.

use super::super::error::{ServiceError, ServiceResult};

/// Term inside a SQL-ish `LIKE '%term%'` clause.
pub fn like_term(q: &str) -> Option<&str> {
    q.split_once("like '%")?.1.split_once("%'").map(|(term, _)| term)
}

/// Term inside a SQL-ish `= 'term'` clause.
pub fn eq_term(q: &str) -> Option<&str> {
    q.split_once("= '")?.1.split_once('\'').map(|(term, _)| term)
}

/// Day count from an interval clause, defaulting to 30 when the query does
/// not spell one out.
///
/// Understands `interval N day` and the `dateadd(day, -N, ...)` /
/// `getdate() - N` family.
///
/// # Errors
/// Returns an error when an interval anchor is present but the day count
/// does not parse as an integer.
pub fn interval_days(q: &str) -> ServiceResult<i64> {
    if let Some((_, rest)) = q.split_once("interval") {
        let raw = rest
            .split_once("day")
            .map(|(n, _)| n.trim())
            .unwrap_or_default();
        return raw
            .parse()
            .map_err(|_| ServiceError::validation(format!("bad interval day count: '{raw}'")));
    }
    if q.contains("dateadd") || q.contains("getdate() -") {
        let raw = q
            .split_once("day, -")
            .and_then(|(_, rest)| rest.split(',').next())
            .map(str::trim)
            .unwrap_or_default();
        return raw
            .parse()
            .map_err(|_| ServiceError::validation(format!("bad interval day count: '{raw}'")));
    }
    Ok(30)
}

/// Subject of a "<name> is from which department" style question.
pub fn department_subject(q: &str) -> Option<String> {
    let before = if let Some((before, _)) = q.split_once("is from which department") {
        before
    } else {
        q.split_once("whcih department")?.0
    };
    let term = before.replace("is ", "");
    let term = term.trim();
    (!term.is_empty()).then(|| term.to_string())
}

/// Subject of an "is <name> in that list" membership question.
pub fn membership_subject(q: &str) -> Option<String> {
    if q.contains("is there any user named") {
        let rest = q.split_once("is there any user named")?.1;
        let term = rest.split("in that list").next()?.trim();
        return (!term.is_empty()).then(|| term.to_string());
    }
    let rest = q.split_once("is ")?.1;
    let term = rest.split(" in ").next()?.trim();
    (!term.is_empty()).then(|| term.to_string())
}

/// Subject named after a "name containing" / "named" / "name" anchor.
///
/// Anchors are tried most-specific first so "name containing" is not
/// swallowed by the bare "name" anchor.
pub fn named_subject(q: &str) -> Option<String> {
    const ANCHORS: [&str; 5] = [
        "name containing",
        "name contains",
        "with the name",
        "named",
        "name",
    ];
    for anchor in ANCHORS {
        if let Some((_, rest)) = q.split_once(anchor) {
            let term = rest.trim_matches('\'').trim();
            return (!term.is_empty()).then(|| term.to_string());
        }
    }
    None
}

/// Subject of a "have <name> sign-in'ed" / "has <name> signed in" question.
pub fn signin_subject(q: &str) -> Option<String> {
    if q.contains("have ") && q.contains(" sign-in'ed") {
        let rest = q.split_once("have ")?.1;
        let term = rest.split(" sign-in'ed").next()?.trim();
        return (!term.is_empty()).then(|| term.to_string());
    }
    if q.contains("has ") && q.contains(" signed in") {
        let rest = q.split_once("has ")?.1;
        let term = rest.split(" signed in").next()?.trim();
        return (!term.is_empty()).then(|| term.to_string());
    }
    None
}
