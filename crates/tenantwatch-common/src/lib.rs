//! # tenantwatch-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AnalysisConfig, AppConfig, AppSettings, CompletionConfig, ConfigError, CorsConfig,
    DirectoryConfig, Environment, ServerConfig, SignInLogConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError, TracingGuard};
