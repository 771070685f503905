//! User entity - one directory account

/// Placeholder rendered for text fields the directory did not supply.
pub const NA: &str = "N/A";

/// Placeholder rendered for an empty group membership list.
pub const NO_GROUPS: &str = "No groups";

/// A directory account as returned by a roster fetch.
///
/// `id` is the only field guaranteed stable and unique across a fetch cycle;
/// every other field may be missing and renders as `"N/A"`. Records are
/// immutable for the duration of an analysis session and replaced wholesale
/// on re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    /// Used for fuzzy user lookup; not guaranteed unique in practice.
    pub principal_name: String,
    pub display_name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub account_enabled: bool,
    pub user_type: String,
    /// Group display names, in directory order. Empty means "no groups".
    pub groups: Vec<String>,
}

impl UserRecord {
    /// Create a record with only the required identity fields set.
    pub fn new(
        id: impl Into<String>,
        principal_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            principal_name: principal_name.into(),
            display_name: display_name.into(),
            job_title: None,
            department: None,
            account_enabled: true,
            user_type: "Member".to_string(),
            groups: Vec::new(),
        }
    }

    /// Case-insensitive substring match against the principal name.
    ///
    /// This is the lookup rule every name-bearing query uses; multiple
    /// users may match one search term.
    pub fn principal_matches(&self, term: &str) -> bool {
        self.principal_name
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// Job title or `"N/A"`.
    pub fn job_title_display(&self) -> &str {
        self.job_title.as_deref().unwrap_or(NA)
    }

    /// Department or `"N/A"`.
    pub fn department_display(&self) -> &str {
        self.department.as_deref().unwrap_or(NA)
    }

    /// Comma-joined group names, or the `"No groups"` sentinel.
    pub fn groups_display(&self) -> String {
        if self.groups.is_empty() {
            NO_GROUPS.to_string()
        } else {
            self.groups.join(", ")
        }
    }
}
