//! Completion-backed insight analyses
//!
//! Sends roster summaries to the configured completion deployment and parses
//! the line-oriented answers. Entirely optional; every deterministic answer
//! lives in `aggregates` instead.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, instrument};

use tenantwatch_core::{CompletionClient, UserRecord, NA, NO_GROUPS};

use super::error::ServiceResult;

/// Insight analyses over the roster via a completion deployment.
pub struct InsightsService {
    client: Arc<dyn CompletionClient>,
}

impl InsightsService {
    #[must_use]
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Ask the deployment for the distinct departments in the roster.
    ///
    /// # Errors
    /// Returns an error if the completion request fails.
    #[instrument(skip_all)]
    pub async fn analyze_departments(&self, users: &[UserRecord]) -> ServiceResult<Vec<String>> {
        let user_data: String = users
            .iter()
            .map(|u| {
                format!(
                    "User: {}, Department: {}\n",
                    u.principal_name,
                    u.department_display()
                )
            })
            .collect();

        let prompt = format!(
            "Analyze the following user data and identify the different departments represented.\n\
             Return a list of unique departments, removing any duplicates or irrelevant entries like 'N/A'.\n\
             \n\
             Example:\n\
             User Data:\n\
             User: john.doe@example.com, Department: Sales\n\
             User: jane.smith@example.com, Department: Marketing\n\
             User: bob.johnson@example.com, Department: Sales\n\
             \n\
             Expected Output:\n\
             Sales\n\
             Marketing\n\
             \n\
             Now, analyze the following user data:\n\
             {user_data}\n\
             Return the unique departments in the following format:\n\
             Department 1\n\
             Department 2\n\
             ..."
        );

        let answer = self.client.complete(&prompt).await?;
        let departments = parse_lines(&answer, &[NA]);
        info!(count = departments.len(), "department analysis complete");
        Ok(departments)
    }

    /// Ask the deployment for meaningful roles suggested by job titles,
    /// departments, and group memberships.
    ///
    /// # Errors
    /// Returns an error if the completion request fails.
    #[instrument(skip_all)]
    pub async fn analyze_roles(&self, users: &[UserRecord]) -> ServiceResult<Vec<String>> {
        let user_data: String = users
            .iter()
            .map(|u| {
                format!(
                    "User: {}, Job Title: {}, Department: {}, Groups: {}\n",
                    u.principal_name,
                    u.job_title_display(),
                    u.department_display(),
                    u.groups_display()
                )
            })
            .collect();

        let prompt = format!(
            "Analyze the following user data to identify potential roles. Consider the job titles, \
             departments, and group memberships to suggest meaningful roles. Return a list of unique \
             role names, ensuring they are distinct and relevant. Avoid duplicating roles that are \
             essentially the same. Remove any irrelevant entries like 'N/A' or 'No groups'.\n\
             \n\
             Example:\n\
             User Data:\n\
             User: alice.brown@example.com, Job Title: Software Engineer, Department: Engineering, Groups: Developers\n\
             User: charlie.wilson@example.com, Job Title: HR Specialist, Department: Human Resources, Groups: HR Team\n\
             \n\
             Expected Output:\n\
             Software Engineer\n\
             HR Specialist\n\
             \n\
             Now, analyze the following user data:\n\
             {user_data}\n\
             Return the unique roles in the following format:\n\
             Role Name 1\n\
             Role Name 2\n\
             ..."
        );

        let answer = self.client.complete(&prompt).await?;
        let roles = parse_lines(&answer, &[NA, NO_GROUPS]);
        info!(count = roles.len(), "role analysis complete");
        Ok(roles)
    }
}

/// Split a line-oriented answer, dropping blanks and excluded sentinels,
/// deduplicating, and sorting for a stable order.
fn parse_lines(answer: &str, excluded: &[&str]) -> Vec<String> {
    let unique: BTreeSet<String> = answer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !excluded.contains(line))
        .map(String::from)
        .collect();
    unique.into_iter().collect()
}
