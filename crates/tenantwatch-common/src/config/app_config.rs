//! Application configuration structs
//!
//! Loads configuration from environment variables (a `.env` file is honored
//! when present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub directory: DirectoryConfig,
    pub signin_log: SignInLogConfig,
    pub analysis: AnalysisConfig,
    pub completion: Option<CompletionConfig>,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Directory tenant credentials for the fetch collaborator
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// Sign-in collection window, in days back from "now".
    #[serde(default = "default_signin_window_days")]
    pub signin_window_days: u32,
}

/// Sign-in log file settings
#[derive(Debug, Clone, Deserialize)]
pub struct SignInLogConfig {
    #[serde(default = "default_signin_log_path")]
    pub path: String,
}

/// Inactivity analysis settings
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Threshold used when a caller does not supply one.
    #[serde(default = "default_threshold_days")]
    pub default_threshold_days: u32,
    /// Upper bound enforced on API requests. The analyzer itself accepts
    /// any positive threshold.
    #[serde(default = "default_max_threshold_days")]
    pub max_threshold_days: u32,
}

/// Completion-service settings (optional; insight analyses only)
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "tenantwatch".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_signin_window_days() -> u32 {
    30
}

fn default_signin_log_path() -> String {
    "signin_logs.csv".to_string()
}

fn default_threshold_days() -> u32 {
    30
}

fn default_max_threshold_days() -> u32 {
    90
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            directory: DirectoryConfig {
                tenant_id: env::var("TENANT_ID").map_err(|_| ConfigError::MissingVar("TENANT_ID"))?,
                client_id: env::var("CLIENT_ID").map_err(|_| ConfigError::MissingVar("CLIENT_ID"))?,
                client_secret: env::var("CLIENT_SECRET")
                    .map_err(|_| ConfigError::MissingVar("CLIENT_SECRET"))?,
                signin_window_days: env::var("SIGNIN_WINDOW_DAYS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_signin_window_days),
            },
            signin_log: SignInLogConfig {
                path: env::var("SIGNIN_LOG_PATH").unwrap_or_else(|_| default_signin_log_path()),
            },
            analysis: AnalysisConfig {
                default_threshold_days: env::var("INACTIVITY_DEFAULT_DAYS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_threshold_days),
                max_threshold_days: env::var("INACTIVITY_MAX_DAYS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_threshold_days),
            },
            completion: Self::completion_from_env()?,
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }

    /// The completion service is optional: absent entirely is fine, but a
    /// partially-configured one is a misconfiguration worth failing on.
    fn completion_from_env() -> Result<Option<CompletionConfig>, ConfigError> {
        let vars = [
            "OPENAI_ENDPOINT",
            "OPENAI_API_KEY",
            "OPENAI_DEPLOYMENT_NAME",
            "OPENAI_API_VERSION",
        ];
        let values: Vec<Option<String>> = vars.iter().map(|v| env::var(v).ok()).collect();

        if values.iter().all(Option::is_none) {
            return Ok(None);
        }
        if let Some(missing) = vars
            .iter()
            .zip(&values)
            .find_map(|(name, value)| value.is_none().then_some(*name))
        {
            return Err(ConfigError::MissingVar(missing));
        }

        let mut values = values.into_iter().flatten();
        Ok(Some(CompletionConfig {
            endpoint: values.next().unwrap_or_default(),
            api_key: values.next().unwrap_or_default(),
            deployment: values.next().unwrap_or_default(),
            api_version: values.next().unwrap_or_default(),
        }))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
