//! Inactivity analysis integration tests
//!
//! Exercises the analysis pipeline over realistic rosters: threshold
//! behavior, ordering, fold semantics of the sign-in index, and timestamp
//! parsing across both accepted formats.

use chrono::Duration;

use integration_tests::fixtures::{fixed_now, signin, standard_index, standard_roster, user};
use tenantwatch_core::{parse_signin_timestamp, DaysInactive, SignInIndex, SignInRecord};
use tenantwatch_service::find_inactive;

#[test]
fn test_standard_roster_at_default_threshold() {
    let users = standard_roster();
    let inactive = find_inactive(&users, &standard_index(), 30, fixed_now()).unwrap();

    // u1 signed in 2 days ago and is active; u2 is 45 days stale; u3 never
    // appears in the index.
    assert_eq!(inactive.len(), 2);
    assert_eq!(inactive[0].user_id, "u2");
    assert_eq!(inactive[0].days_inactive, DaysInactive::Days(45));
    assert_eq!(inactive[1].user_id, "u3");
    assert_eq!(inactive[1].days_inactive, DaysInactive::NeverSignedIn);
}

#[test]
fn test_threshold_boundary_is_inclusive() {
    let users = vec![user("u1", "edge@contoso.com", None, None, &[])];
    let index = SignInIndex::from_records(vec![signin("u1", 30)]);

    let inactive = find_inactive(&users, &index, 30, fixed_now()).unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].days_inactive, DaysInactive::Days(30));

    // One day fresher and the user drops out.
    let index = SignInIndex::from_records(vec![signin("u1", 29)]);
    assert!(find_inactive(&users, &index, 30, fixed_now())
        .unwrap()
        .is_empty());
}

#[test]
fn test_partial_days_truncate() {
    // 29 days and 23 hours reads as 29 days, below a 30-day threshold.
    let users = vec![user("u1", "almost@contoso.com", None, None, &[])];
    let last = fixed_now() - Duration::days(29) - Duration::hours(23);
    let index = SignInIndex::from_records(vec![SignInRecord::new("u1", last, "Almost")]);

    assert!(find_inactive(&users, &index, 30, fixed_now())
        .unwrap()
        .is_empty());
}

#[test]
fn test_output_preserves_roster_order() {
    let users = vec![
        user("z9", "zoe@contoso.com", None, None, &[]),
        user("a1", "abe@contoso.com", None, None, &[]),
        user("m5", "mia@contoso.com", None, None, &[]),
    ];
    let inactive = find_inactive(&users, &SignInIndex::empty(), 30, fixed_now()).unwrap();

    let ids: Vec<&str> = inactive.iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, vec!["z9", "a1", "m5"]);
}

#[test]
fn test_every_user_is_classified_exactly_once() {
    // Each roster entry is either inactive or fresh, never both, never
    // duplicated, regardless of how many sign-ins the index saw.
    let users = standard_roster();
    let mut records = standard_signins_with_history();
    records.push(signin("u2", 200));

    let index = SignInIndex::from_records(records);
    let inactive = find_inactive(&users, &index, 30, fixed_now()).unwrap();

    for user in &users {
        let hits = inactive.iter().filter(|i| i.user_id == user.id).count();
        assert!(hits <= 1, "user {} classified {hits} times", user.id);
    }
    // u2's 45-day latest wins over the 200-day older entry.
    let u2 = inactive.iter().find(|i| i.user_id == "u2").unwrap();
    assert_eq!(u2.days_inactive, DaysInactive::Days(45));
}

fn standard_signins_with_history() -> Vec<SignInRecord> {
    vec![signin("u1", 2), signin("u1", 90), signin("u2", 45)]
}

#[test]
fn test_index_fold_is_idempotent_and_order_free() {
    let records = vec![signin("u1", 5), signin("u1", 60), signin("u1", 20)];

    let mut forward = SignInIndex::empty();
    for r in &records {
        forward.observe(&r.user_id, r.timestamp);
    }

    let mut reversed = SignInIndex::empty();
    for r in records.iter().rev() {
        reversed.observe(&r.user_id, r.timestamp);
        // Re-observing the same record must not change the outcome.
        reversed.observe(&r.user_id, r.timestamp);
    }

    assert_eq!(forward, reversed);
    assert_eq!(
        forward.last_signin("u1"),
        Some(fixed_now() - Duration::days(5))
    );
}

#[test]
fn test_signins_for_unknown_users_are_ignored() {
    let users = vec![user("u1", "only@contoso.com", None, None, &[])];
    let index = SignInIndex::from_records(vec![signin("u1", 2), signin("ghost", 99)]);

    let inactive = find_inactive(&users, &index, 30, fixed_now()).unwrap();
    assert!(inactive.is_empty());
}

#[test]
fn test_empty_user_id_is_rejected() {
    let users = vec![
        user("u1", "fine@contoso.com", None, None, &[]),
        user("  ", "nameless@contoso.com", None, None, &[]),
    ];
    let err = find_inactive(&users, &SignInIndex::empty(), 30, fixed_now()).unwrap_err();
    assert!(err.to_string().contains("nameless"));
}

#[test]
fn test_both_timestamp_formats_agree() {
    let strict = parse_signin_timestamp("2025-04-01T09:30:00Z").unwrap();
    let rfc3339 = parse_signin_timestamp("2025-04-01T09:30:00+00:00").unwrap();
    assert_eq!(strict, rfc3339);

    let users = vec![user("u1", "dual@contoso.com", None, None, &[])];
    let a = SignInIndex::from_records(vec![SignInRecord::new("u1", strict, "Dual")]);
    let b = SignInIndex::from_records(vec![SignInRecord::new("u1", rfc3339, "Dual")]);
    assert_eq!(
        find_inactive(&users, &a, 30, fixed_now()).unwrap(),
        find_inactive(&users, &b, 30, fixed_now()).unwrap()
    );
}

#[test]
fn test_zero_threshold_flags_everyone_with_any_age() {
    let users = vec![user("u1", "today@contoso.com", None, None, &[])];
    let index = SignInIndex::from_records(vec![signin("u1", 0)]);

    // Same-day sign-in is 0 days old, and 0 >= 0.
    let inactive = find_inactive(&users, &index, 0, fixed_now()).unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].days_inactive, DaysInactive::Days(0));
}
