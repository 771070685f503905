//! Directory layer errors

use tenantwatch_core::DomainError;

/// Errors from Graph and completion clients
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Token request failed: {0}")]
    TokenRequest(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Graph returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

impl From<GraphError> for DomainError {
    fn from(err: GraphError) -> Self {
        Self::FetchError(err.to_string())
    }
}

impl From<GraphError> for tenantwatch_common::AppError {
    fn from(err: GraphError) -> Self {
        Self::Fetch(err.to_string())
    }
}
