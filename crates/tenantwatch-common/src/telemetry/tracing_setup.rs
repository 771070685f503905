//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering and
//! an optional daily-rolling log file alongside terminal output.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    pub level: Level,
    /// Enable JSON output format on the terminal layer.
    pub json: bool,
    /// Directory for rolling log files; `None` disables file output.
    pub log_dir: Option<PathBuf>,
    /// File name prefix for the rolling log file.
    pub file_prefix: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            log_dir: None,
            file_prefix: "app".to_string(),
        }
    }
}

impl TracingConfig {
    /// Development configuration: debug level, pretty terminal output,
    /// rolling file under `logs/`.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            log_dir: Some(PathBuf::from("logs")),
            file_prefix: "app".to_string(),
        }
    }

    /// Production configuration: info level, JSON terminal output,
    /// rolling file under `logs/`.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            log_dir: Some(PathBuf::from("logs")),
            file_prefix: "app".to_string(),
        }
    }
}

/// Keeps the non-blocking file writer alive; dropping it flushes and stops
/// file logging. Hold it for the lifetime of the process.
pub struct TracingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Uses the `RUST_LOG` environment variable for filtering if set, otherwise
/// defaults to the configured level.
///
/// # Panics
/// Panics if a subscriber is already installed.
pub fn init_tracing(config: TracingConfig) -> TracingGuard {
    try_init_tracing(config).expect("tracing subscriber already initialized")
}

/// Try to initialize tracing, returning an error instead of panicking when a
/// subscriber is already installed.
pub fn try_init_tracing(config: TracingConfig) -> Result<TracingGuard, TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let (file_layer, file_guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let terminal_layer = if config.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().with_file(true).with_line_number(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(terminal_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)?;

    Ok(TracingGuard {
        _file_guard: file_guard,
    })
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
