//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Data-integrity errors (hard failures; silent recovery would corrupt
    // the sign-in index)
    // =========================================================================
    #[error("Roster record has no user id (display name: {display_name:?})")]
    MissingUserId { display_name: String },

    // =========================================================================
    // Ingestion errors (recovered row-locally by callers)
    // =========================================================================
    #[error("Unparseable sign-in timestamp: {0:?}")]
    InvalidTimestamp(String),

    // =========================================================================
    // Validation errors
    // =========================================================================
    #[error("Inactivity threshold must be a positive number of days")]
    InvalidThreshold,

    // =========================================================================
    // Collaborator errors (wrapped)
    // =========================================================================
    #[error("Directory fetch error: {0}")]
    FetchError(String),

    #[error("Completion service error: {0}")]
    CompletionError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingUserId { .. } => "DATA_INTEGRITY",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::InvalidThreshold => "INVALID_THRESHOLD",
            Self::FetchError(_) => "FETCH_ERROR",
            Self::CompletionError(_) => "COMPLETION_ERROR",
        }
    }

    /// Check if this is a data-integrity error (must not be swallowed)
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::MissingUserId { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidThreshold | Self::InvalidTimestamp(_))
    }
}
