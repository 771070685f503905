//! Configuration structs

mod app_config;

pub use app_config::{
    AnalysisConfig, AppConfig, AppSettings, CompletionConfig, ConfigError, CorsConfig,
    DirectoryConfig, Environment, ServerConfig, SignInLogConfig,
};
