//! Sign-in index - latest sign-in timestamp per user

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entities::SignInRecord;

/// Mapping from user id to the latest known sign-in timestamp.
///
/// Built once per fetch cycle by a max-fold over raw sign-in records and
/// rebuilt wholesale, never incrementally patched. An absent entry means the
/// user never signed in within the collected window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInIndex {
    latest: HashMap<String, DateTime<Utc>>,
}

impl SignInIndex {
    /// An index with no entries; inactivity analysis degrades gracefully to
    /// "everyone inactive" against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fold raw records down to the maximum timestamp per user.
    ///
    /// Folding is idempotent: feeding the same records twice yields the same
    /// index as feeding them once.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SignInRecord>,
    {
        let mut index = Self::default();
        for record in records {
            index.observe(&record.user_id, record.timestamp);
        }
        index
    }

    /// Record one sign-in observation, keeping the maximum per user.
    pub fn observe(&mut self, user_id: &str, timestamp: DateTime<Utc>) {
        self.latest
            .entry(user_id.to_string())
            .and_modify(|existing| {
                if timestamp > *existing {
                    *existing = timestamp;
                }
            })
            .or_insert(timestamp);
    }

    /// Latest sign-in for a user, if any was ever recorded.
    pub fn last_signin(&self, user_id: &str) -> Option<DateTime<Utc>> {
        self.latest.get(user_id).copied()
    }

    /// Iterate over `(user_id, latest_timestamp)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DateTime<Utc>)> {
        self.latest.iter().map(|(id, ts)| (id.as_str(), *ts))
    }

    pub fn len(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}
