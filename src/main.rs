//! LLM response normalization server
//!
//! HTTP service that accepts raw vendor responses and returns the
//! normalized translation result

use anyhow::{Context, Result};
use llmnorm::config::settings::LoggingConfig;
use llmnorm::{create_router, version_info, AppConfig, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings come first since they decide how logging is set up
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", version_info());

    let app_config = AppConfig::load_default().context("Failed to load vendor configuration")?;
    info!("📁 Vendor configuration loaded ({} vendors)", app_config.vendors.len());

    let addr = settings.bind_address();

    // Create router
    let app = create_router(settings, app_config)?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 llmnorm server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("🔄 Normalize endpoint: http://{}/v1/normalize/{{vendor}}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if logging.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(logging.level.as_str())
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(logging.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}
