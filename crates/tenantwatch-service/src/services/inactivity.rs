//! Inactivity analysis
//!
//! The analysis core: given a roster, a sign-in index, and a threshold,
//! produce the users considered dormant.

use chrono::{DateTime, Utc};
use tracing::debug;

use tenantwatch_core::{
    DaysInactive, DomainError, InactiveUserSummary, SignInIndex, UserRecord,
};

use super::error::ServiceResult;

/// Find users with no sign-in within `threshold_days` of `now`.
///
/// A user is inactive when the index has no entry for them at all, or when
/// their latest sign-in is at least `threshold_days` old. Day counts
/// truncate toward zero, so 29.9 days reads as 29. Output preserves roster
/// order.
///
/// # Errors
/// Returns an error if any roster entry has an empty user id; an
/// unidentifiable user cannot be matched against the index, and silently
/// marking them dormant would be wrong either way.
pub fn find_inactive(
    users: &[UserRecord],
    index: &SignInIndex,
    threshold_days: u32,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<InactiveUserSummary>> {
    let mut inactive = Vec::new();

    for user in users {
        if user.id.trim().is_empty() {
            return Err(DomainError::MissingUserId {
                display_name: user.display_name.clone(),
            }
            .into());
        }

        match index.last_signin(&user.id) {
            None => inactive.push(InactiveUserSummary {
                user_id: user.id.clone(),
                display_name: user.display_name.clone(),
                days_inactive: DaysInactive::NeverSignedIn,
            }),
            Some(last) => {
                let days = (now - last).num_days();
                if days >= i64::from(threshold_days) {
                    inactive.push(InactiveUserSummary {
                        user_id: user.id.clone(),
                        display_name: user.display_name.clone(),
                        days_inactive: DaysInactive::Days(days),
                    });
                }
            }
        }
    }

    debug!(
        threshold_days,
        roster = users.len(),
        inactive = inactive.len(),
        "inactivity analysis complete"
    );
    Ok(inactive)
}
