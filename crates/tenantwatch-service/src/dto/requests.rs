//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Natural-language or SQL-flavored query request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(length(min = 1, max = 500, message = "Query must be 1-500 characters"))]
    pub query: String,
}

/// Query parameters for the inactivity analysis endpoint
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct InactiveQueryParams {
    /// Inactivity threshold in days; the configured default applies when
    /// omitted.
    #[validate(range(min = 1, max = 90, message = "days must be between 1 and 90"))]
    pub days: Option<u32>,
}
