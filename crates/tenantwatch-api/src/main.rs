//! Tenantwatch API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tenantwatch-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored when present).

use tenantwatch_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing before anything else logs
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    let _guard = match try_init_tracing(tracing_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize tracing: {e}");
            None
        }
    };

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting Tenantwatch API server"
    );

    tenantwatch_api::run(config).await?;

    Ok(())
}
