// Customer Bank - Web Server
// REST API with Axum over the seeded in-memory bank

use anyhow::{Context, Result};
use customer_bank::api::{self, AppState};
use customer_bank::{Bank, Config, DEFAULT_LOG_FILTER};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🌐 Customer Bank - Web Server v{}", customer_bank::VERSION);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; using default configuration");
            Config::default()
        }
    };

    let bank = Bank::seeded(config.sync_policy).context("Failed to seed bank")?;
    info!(policy = ?bank.policy(), "account reconciliation policy");
    let app = api::app(AppState::new(bank), &config)
        .with_context(|| format!("Invalid BANK_CORS_ORIGIN: {}", config.cors_origin))?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("🚀 Server running on http://{}", addr);
    info!("   Accounts:  http://{}/accounts", addr);
    info!("   Customers: http://{}/customers", addr);
    info!("   CORS origin: {}", config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
    }
}
