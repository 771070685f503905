//! CSV row models for the sign-in log

use serde::{Deserialize, Serialize};
use tenantwatch_core::{parse_signin_timestamp, SignInRecord, NA};

/// One row of the sign-in log file.
///
/// Exported files use `userId` / `userDisplayName` / `signInDateTime`
/// headers; hand-edited or legacy files may use the spaced variants, so the
/// reader accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRow {
    #[serde(rename = "userId", alias = "User ID")]
    pub user_id: String,

    #[serde(rename = "userDisplayName", alias = "Display Name")]
    pub display_name: String,

    /// Raw timestamp text. `N/A` marks a user with no recorded sign-in.
    #[serde(rename = "signInDateTime", alias = "Sign-In Date")]
    pub signin_datetime: String,

    #[serde(rename = "collectionDate", alias = "Collection Date", default)]
    pub collection_date: Option<String>,
}

impl SignInRow {
    /// Convert to a domain record. Returns `None` for the `N/A` sentinel and
    /// for rows missing a user id.
    pub fn into_record(self) -> Option<Result<SignInRecord, tenantwatch_core::DomainError>> {
        if self.user_id.trim().is_empty() || self.signin_datetime == NA {
            return None;
        }
        Some(parse_signin_timestamp(&self.signin_datetime).map(|timestamp| SignInRecord {
            user_id: self.user_id,
            timestamp,
            display_name: self.display_name,
        }))
    }

    /// Build a row from a domain record, stamping the given collection date.
    #[must_use]
    pub fn from_record(record: &SignInRecord, collection_date: &str) -> Self {
        Self {
            user_id: record.user_id.clone(),
            display_name: record.display_name.clone(),
            signin_datetime: record.timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            collection_date: Some(collection_date.to_string()),
        }
    }
}
