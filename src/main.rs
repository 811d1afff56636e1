//! # Multi Service
//!
//! Entry point for all three services. `SERVICE_ROLE` picks which one this
//! process serves:
//! - `auth`: acknowledges JSON payloads
//! - `log`: timestamps requests
//! - `api`: aggregates the other two (`AUTH_ADDR`, `LOG_ADDR`)

use anyhow::Result;
use tracing::info;

use multi_service::config::Settings;
use multi_service::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    multi_service::telemetry::init_tracing();

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        role = %settings.service.role,
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
