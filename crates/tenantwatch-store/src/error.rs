//! Storage layer errors

/// Errors from the sign-in log store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on sign-in log: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error in sign-in log: {0}")]
    Csv(#[from] csv::Error),
}

impl From<StoreError> for tenantwatch_common::AppError {
    fn from(err: StoreError) -> Self {
        Self::SignInLog(err.to_string())
    }
}
