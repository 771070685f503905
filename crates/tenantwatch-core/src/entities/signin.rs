//! Sign-in event entity and timestamp parsing

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::DomainError;

/// One raw sign-in event.
///
/// Multiple records may exist per user; only the maximum timestamp per user
/// survives into the [`crate::SignInIndex`]. The display name is
/// denormalized and informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRecord {
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub display_name: String,
}

impl SignInRecord {
    pub fn new(
        user_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp,
            display_name: display_name.into(),
        }
    }
}

/// Parse a sign-in timestamp in either accepted textual format.
///
/// The log historically carries the strict `%Y-%m-%dT%H:%M:%SZ` layout;
/// newer rows are general RFC 3339 where a trailing `Z` stands for the
/// `+00:00` UTC offset. Both formats for the same instant parse to the same
/// UTC value.
pub fn parse_signin_timestamp(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidTimestamp(raw.to_string()))
}
