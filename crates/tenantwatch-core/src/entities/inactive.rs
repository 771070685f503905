//! Inactivity analysis output types

use std::fmt;

/// Days since a user's last sign-in, or a marker that none was ever seen.
///
/// The never-signed-in case is a distinct variant rather than a numeric
/// sentinel so it can never leak into day arithmetic; callers that need an
/// ordering use [`DaysInactive::sort_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysInactive {
    /// Whole days since the last recorded sign-in (truncating arithmetic).
    Days(i64),
    /// No sign-in record exists for this user.
    NeverSignedIn,
}

impl DaysInactive {
    /// Sort key that orders never-signed-in users after every counted value.
    pub fn sort_key(&self) -> (bool, i64) {
        match self {
            Self::Days(d) => (false, *d),
            Self::NeverSignedIn => (true, 0),
        }
    }
}

impl fmt::Display for DaysInactive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(d) => write!(f, "{d}"),
            Self::NeverSignedIn => write!(f, "No sign-in recorded"),
        }
    }
}

/// Per-user result of the inactivity analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactiveUserSummary {
    pub user_id: String,
    pub display_name: String,
    pub days_inactive: DaysInactive,
}
